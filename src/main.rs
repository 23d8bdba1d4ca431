//! Luck Wheel entry point
//!
//! Browser builds wire the spin engine to the page; native builds run a
//! headless demo that logs every spin.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlInputElement, KeyboardEvent, Request, RequestInit, RequestMode, Response};

    use luck_wheel::consts::DEFAULT_BANTER_JSON;
    use luck_wheel::renderer::CanvasStage;
    use luck_wheel::sim::{Banter, SpinEngine, WheelData, WheelModel};
    use luck_wheel::sinks::ResultSink;
    use luck_wheel::{Settings, SpinTuning};

    /// Served next to index.html by trunk's copy-dir
    const WHEEL_DATA_URL: &str = "./assets/wheel_prizes.json";

    struct App {
        engine: SpinEngine<CanvasStage>,
    }

    impl App {
        fn spin(&mut self) {
            self.engine.stage().resume_audio();
            match self.engine.spin() {
                Ok(true) => log::debug!("Spin started"),
                Ok(false) => {}
                Err(e) => log::error!("Spin failed: {}", e),
            }
        }

        fn set_reduced_motion(&mut self, reduced: bool) {
            self.engine.set_reduced_motion(reduced);
            self.engine.stage_mut().set_reduced_motion(reduced);
            log::info!("Reduced motion: {}", reduced);
        }
    }

    async fn fetch_text(url: &str) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);
        let request = Request::new_with_str_and_init(url, &opts)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
        }
        JsFuture::from(response.text()?)
            .await?
            .as_string()
            .ok_or_else(|| JsValue::from_str("response body is not text"))
    }

    async fn load_wheel(tuning: &SpinTuning) -> Result<WheelModel, String> {
        let json = fetch_text(WHEEL_DATA_URL)
            .await
            .map_err(|e| format!("could not fetch {}: {:?}", WHEEL_DATA_URL, e))?;
        let data = WheelData::from_json(&json).map_err(|e| e.to_string())?;
        WheelModel::from_data(data, tuning.pointer_angle).map_err(|e| e.to_string())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Luck Wheel starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let settings = Settings::detect();
        let tuning = SpinTuning::default();
        let seed = js_sys::Date::now() as u64;

        let loaded = load_wheel(&tuning).await.and_then(|model| {
            let banter = Banter::from_json(DEFAULT_BANTER_JSON).map_err(|e| e.to_string())?;
            Ok((model, banter))
        });

        let (model, banter) = match loaded {
            Ok(loaded) => loaded,
            Err(message) => {
                log::error!("Error loading wheel data: {}", message);
                // Empty wheel, error text, spin disabled
                if let Some(mut stage) = CanvasStage::new(document, Vec::new(), settings, seed) {
                    stage.show_error("The wheel could not be loaded. Please refresh the page.");
                }
                return;
            }
        };

        let Some(stage) = CanvasStage::new(
            document.clone(),
            model.segments().to_vec(),
            settings.clone(),
            seed.wrapping_add(1),
        ) else {
            log::error!("No #wheelCanvas with a 2D context - nothing to draw on");
            return;
        };

        let mut engine = match SpinEngine::new(model, tuning, banter, stage, seed) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("Error initializing wheel: {}", e);
                return;
            }
        };
        engine.set_reduced_motion(settings.reduced_motion);
        engine.stage_mut().set_spin_enabled(true);

        log::info!("Wheel initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App { engine }));
        setup_controls(&document, app.clone(), settings.reduced_motion);

        request_animation_frame(app);

        log::info!("Luck Wheel running!");
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>, reduced_motion: bool) {
        // Spin buttons
        for id in ["spinBtn", "spinAgainBtn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    app.borrow_mut().spin();
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Enter on the spin button
        if let Some(btn) = document.get_element_by_id("spinBtn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    event.prevent_default();
                    app.borrow_mut().spin();
                }
            });
            let _ = btn.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reduced motion toggle, seeded from prefers-reduced-motion
        let toggle = document
            .get_element_by_id("reduceMotion")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        if let Some(toggle) = toggle {
            toggle.set_checked(reduced_motion);
            let toggle_clone = toggle.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().set_reduced_motion(toggle_clone.checked());
            });
            let _ = toggle.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            // Stage clock first so effects fired this frame are timed from `time`
            a.engine.stage_mut().tick(time);
            a.engine.frame(time);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Luck Wheel (native) starting...");
    log::info!("Browser UI requires wasm32 - run with `trunk serve` for the web version");

    // Usage: luck-wheel [seed] [spins]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed_u64);
    let spins = args.next().and_then(|s| s.parse().ok()).unwrap_or(3_u32);

    if let Err(e) = headless::run(seed, spins) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use luck_wheel::consts::{DEFAULT_BANTER_JSON, DEFAULT_WHEEL_JSON};
    use luck_wheel::sim::{Banter, FrameStatus, SpinEngine, WheelData};
    use luck_wheel::sinks::LogStage;
    use luck_wheel::{SpinTuning, WheelError};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run(seed: u64, spins: u32) -> Result<(), WheelError> {
        let data = WheelData::from_json(DEFAULT_WHEEL_JSON)?;
        let banter = Banter::from_json(DEFAULT_BANTER_JSON)?;
        let mut engine =
            SpinEngine::from_data(data, SpinTuning::default(), banter, LogStage::default(), seed)?;

        let mut clock = 0.0;
        for round in 1..=spins {
            engine.spin()?;
            let outcome = loop {
                if let FrameStatus::Completed(outcome) = engine.frame(clock) {
                    break outcome;
                }
                clock += FRAME_MS;
            };

            let landed = engine.model().segment_at_pointer(engine.current_angle());
            println!(
                "Spin {}: almost {} ({:?}), interrupted by {}, landed on {}",
                round,
                outcome.decoy.label,
                outcome.decoy.tier,
                outcome
                    .event
                    .as_ref()
                    .map(|e| e.name.as_str())
                    .unwrap_or("nothing"),
                engine.model().segments()[landed].label
            );
            if let Some(shown) = engine.last_presentation() {
                println!("  {}", shown.roast);
                println!("  {}", shown.toast);
            }
        }

        println!(
            "\n✓ {} spins, {} frames drawn, every one landed on {}",
            spins,
            engine.stage().frames,
            engine.model().good_luck_segment().label
        );
        Ok(())
    }
}
