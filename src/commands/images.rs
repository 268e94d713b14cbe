//! Image Commands
//!
//! `AssetLoader` over `HtmlImageElement`. Images are requested with
//! `crossOrigin = "anonymous"` so a CORS-enabled host keeps the canvas exportable.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use gild_board_core::snapshot::AssetLoader;
use gild_board_core::AssetError;
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoader;

type Outcome = Result<(), String>;

fn settle(slot: &Rc<RefCell<Option<oneshot::Sender<Outcome>>>>, outcome: Outcome) {
    if let Some(tx) = slot.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

impl AssetLoader for ImageLoader {
    type Image = HtmlImageElement;

    fn load(&self, src: &str) -> LocalBoxFuture<'static, Result<HtmlImageElement, AssetError>> {
        let src = src.to_string();
        Box::pin(async move {
            let fail = |reason: String| AssetError {
                src: src.clone(),
                reason,
            };
            let img = HtmlImageElement::new().map_err(|e| fail(format!("{:?}", e)))?;
            img.set_cross_origin(Some("anonymous"));

            let (tx, rx) = oneshot::channel::<Outcome>();
            let slot = Rc::new(RefCell::new(Some(tx)));
            let on_load_slot = slot.clone();
            let onload = Closure::<dyn FnMut()>::new(move || settle(&on_load_slot, Ok(())));
            let on_error_slot = slot.clone();
            let onerror = Closure::<dyn FnMut()>::new(move || {
                settle(&on_error_slot, Err("image failed to load".to_string()))
            });
            img.set_onload(Some(onload.as_ref().unchecked_ref()));
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            img.set_src(&src);

            let outcome = rx.await;
            img.set_onload(None);
            img.set_onerror(None);
            drop(onload);
            drop(onerror);

            match outcome {
                Ok(Ok(())) => Ok(img),
                Ok(Err(reason)) => Err(fail(reason)),
                Err(_) => Err(fail("load was cancelled".to_string())),
            }
        })
    }
}
