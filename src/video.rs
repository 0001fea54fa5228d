use crate::constants::{LAZY_VIDEO_SELECTOR, VIDEO_ROOT_MARGIN, VIDEO_SELECTOR};
use crate::core::{videos_to_pause, LazyTrigger};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback and ignore a rejected promise (autoplay policy and friends).
fn try_play(video: &web::HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[video] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::debug!("[video] play failed: {:?}", e),
    }
}

fn has_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observe `video[loading="lazy"]` and start each one the first time it nears
/// the viewport. Without IntersectionObserver nothing is started.
pub fn wire_lazy_videos(window: &web::Window, document: &web::Document) -> anyhow::Result<usize> {
    let videos: Rc<Vec<web::HtmlVideoElement>> =
        Rc::new(dom::query_all(document, LAZY_VIDEO_SELECTOR));
    if videos.is_empty() {
        return Ok(0);
    }
    if !has_intersection_observer(window) {
        log::warn!("[video] IntersectionObserver unavailable; lazy videos stay idle");
        return Ok(0);
    }

    let trigger = Rc::new(RefCell::new(LazyTrigger::default()));
    let videos_cb = videos.clone();
    let trigger_cb = trigger.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(i) = videos_cb.iter().position(|v| {
                    let el: &web::Element = v;
                    *el == target
                }) else {
                    continue;
                };
                let mut trigger = trigger_cb.borrow_mut();
                if trigger.on_intersection(i, entry.is_intersecting()) {
                    try_play(&videos_cb[i]);
                    observer.unobserve(&target);
                    log::debug!("[video] started #{}, {} still waiting", i, trigger.pending_count());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(VIDEO_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for (i, video) in videos.iter().enumerate() {
        trigger.borrow_mut().observe(i);
        observer.observe(video);
    }
    Ok(videos.len())
}

/// Any video that starts playing pauses every other playing video on the page.
pub fn wire_single_playback(document: &web::Document) -> usize {
    let videos: Rc<Vec<web::HtmlVideoElement>> = Rc::new(dom::query_all(document, VIDEO_SELECTOR));
    for (i, video) in videos.iter().enumerate() {
        let all = videos.clone();
        dom::add_listener(video, "play", move |_ev: web::Event| {
            let paused: Vec<bool> = all.iter().map(|v| v.paused()).collect();
            for j in videos_to_pause(i, &paused) {
                _ = all[j].pause();
            }
        });
    }
    videos.len()
}
