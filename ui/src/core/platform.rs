//! Host capability glue: page location and share/clipboard access.

use super::share::{ShareError, ShareHost, SharePayload};

/// URL to share: the live page location in a browser, `fallback` elsewhere.
pub fn page_url(fallback: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| fallback.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback.to_string()
    }
}

/// Share capabilities of the running host.
///
/// Browsers are probed for `navigator.share` / `navigator.clipboard` on each
/// call. Desktop has no share sheet and copies through the OS clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformShareHost;

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{ShareError, SharePayload};

    fn navigator() -> Option<JsValue> {
        web_sys::window().map(|w| JsValue::from(w.navigator()))
    }

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn describe(err: &JsValue) -> (bool, String) {
        let name = Reflect::get(err, &JsValue::from_str("name"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let message = Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        (name == "AbortError", message)
    }

    async fn await_promise(value: JsValue) -> Result<(), ShareError> {
        let promise = value
            .dyn_into::<Promise>()
            .map_err(|_| ShareError::Failed("host did not return a promise".into()))?;
        JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
            let (aborted, message) = describe(&err);
            if aborted {
                ShareError::Cancelled(message)
            } else {
                ShareError::Failed(message)
            }
        })
    }

    pub(super) fn supports_native_share() -> bool {
        navigator()
            .map(|nav| method(&nav, "share").is_some())
            .unwrap_or(false)
    }

    pub(super) async fn native_share(payload: &SharePayload) -> Result<(), ShareError> {
        let nav = navigator().ok_or(ShareError::Unavailable)?;
        let share = method(&nav, "share").ok_or(ShareError::Unavailable)?;

        let data = Object::new();
        for (key, value) in [
            ("title", &payload.title),
            ("text", &payload.text),
            ("url", &payload.url),
        ] {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|_| ShareError::Failed("unable to build share data".into()))?;
        }

        let pending = share
            .call1(&nav, &data)
            .map_err(|err| ShareError::Failed(describe(&err).1))?;
        await_promise(pending).await
    }

    pub(super) async fn copy_text(text: &str) -> Result<(), ShareError> {
        let nav = navigator().ok_or(ShareError::Unavailable)?;
        let clipboard = Reflect::get(&nav, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
            .ok_or(ShareError::Unavailable)?;
        let write_text = method(&clipboard, "writeText").ok_or(ShareError::Unavailable)?;
        let pending = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| ShareError::Failed(describe(&err).1))?;
        await_promise(pending).await
    }
}

impl ShareHost for PlatformShareHost {
    fn supports_native_share(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web::supports_native_share()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        #[cfg(target_arch = "wasm32")]
        {
            web::native_share(payload).await
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = payload;
            Err(ShareError::Unavailable)
        }
    }

    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        #[cfg(target_arch = "wasm32")]
        {
            web::copy_text(text).await
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use arboard::Clipboard;

            let mut clipboard =
                Clipboard::new().map_err(|err| ShareError::Failed(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ShareError::Failed(err.to_string()))
        }
    }
}
