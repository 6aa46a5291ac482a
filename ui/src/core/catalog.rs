//! Mock content shown inside the phone mockup.
//!
//! Purely illustrative data. Every [`LanguageCode`] has an entry; the
//! exhaustive match in [`mock_content`] keeps that true at compile time.

use super::locale::LanguageCode;

/// A sample event card in the mock discovery feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRecord {
    pub title: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub time: &'static str,
    pub price: &'static str,
    pub image_url: &'static str,
}

/// Category chips plus listing cards for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockContent {
    /// First entry is rendered as the active chip.
    pub categories: &'static [&'static str],
    pub listings: &'static [ListingRecord],
}

const IMG_BREAKFAST: &str =
    "https://images.unsplash.com/photo-1577412647305-991150c7d163?w=400&q=80";
const IMG_HIKE: &str = "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&q=80";
const IMG_SKI: &str = "https://images.unsplash.com/photo-1605540436561-5b52167bc11e?w=400&q=80";
const IMG_RAVE: &str = "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&q=80";

static EN: MockContent = MockContent {
    categories: &["All", "Tech", "Nature", "Music", "Art"],
    listings: &[
        ListingRecord {
            title: "Female Founders Breakfast",
            category: "Business",
            location: "Almaty, Ritz-Carlton",
            time: "10:00",
            price: "7000 ₸",
            image_url: IMG_BREAKFAST,
        },
        ListingRecord {
            title: "Medeo Night Hike",
            category: "Nature",
            location: "Almaty",
            time: "20:00",
            price: "Free",
            image_url: IMG_HIKE,
        },
        ListingRecord {
            title: "Shymbulak Ski Session",
            category: "Sport",
            location: "Almaty",
            time: "11:00",
            price: "5000 ₸",
            image_url: IMG_SKI,
        },
        ListingRecord {
            title: "Underground Rave",
            category: "Music",
            location: "Almaty",
            time: "23:00",
            price: "3000 ₸",
            image_url: IMG_RAVE,
        },
    ],
};

static RU: MockContent = MockContent {
    categories: &["Все", "Тех", "Природа", "Музыка", "Арт"],
    listings: &[
        ListingRecord {
            title: "Завтрак для предпринимательниц",
            category: "Бизнес",
            location: "Алматы, Ritz-Carlton",
            time: "10:00",
            price: "7000 ₸",
            image_url: IMG_BREAKFAST,
        },
        ListingRecord {
            title: "Ночной поход Медеу",
            category: "Природа",
            location: "Алматы",
            time: "20:00",
            price: "Бесплатно",
            image_url: IMG_HIKE,
        },
        ListingRecord {
            title: "Шымбулак: Лыжи",
            category: "Спорт",
            location: "Алматы",
            time: "11:00",
            price: "5000 ₸",
            image_url: IMG_SKI,
        },
        ListingRecord {
            title: "Underground Rave",
            category: "Музыка",
            location: "Алматы",
            time: "23:00",
            price: "3000 ₸",
            image_url: IMG_RAVE,
        },
    ],
};

static KK: MockContent = MockContent {
    categories: &["Барлығы", "Тех", "Табиғат", "Музыка", "Өнер"],
    listings: &[
        ListingRecord {
            title: "Кәсіпкер әйелдермен таңғы ас",
            category: "Бизнес",
            location: "Алматы, Ritz-Carlton",
            time: "10:00",
            price: "7000 ₸",
            image_url: IMG_BREAKFAST,
        },
        ListingRecord {
            title: "Медеу түнгі жорық",
            category: "Табиғат",
            location: "Алматы",
            time: "20:00",
            price: "Тегін",
            image_url: IMG_HIKE,
        },
        ListingRecord {
            title: "Шымбұлақ: Шаңғы тебу",
            category: "Спорт",
            location: "Алматы",
            time: "11:00",
            price: "5000 ₸",
            image_url: IMG_SKI,
        },
        ListingRecord {
            title: "Underground Rave",
            category: "Музыка",
            location: "Almaty",
            time: "23:00",
            price: "3000 ₸",
            image_url: IMG_RAVE,
        },
    ],
};

/// Mock categories and listings for `code`.
pub fn mock_content(code: LanguageCode) -> &'static MockContent {
    match code {
        LanguageCode::Kk => &KK,
        LanguageCode::En => &EN,
        LanguageCode::Ru => &RU,
    }
}
