//! Orbit Lab entry point
//!
//! Handles platform-specific initialization and runs the two loops: the
//! per-frame animation loop and the slow numeric readout loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement};

    use orbit_lab::consts::*;
    use orbit_lab::renderer::vertex::colors;
    use orbit_lab::renderer::{Camera, RenderState, SceneVertex, shapes};
    use orbit_lab::sim::SimulationClock;
    use orbit_lab::{Settings, ViewMode};

    /// Application instance holding all state
    struct App {
        clock: SimulationClock,
        camera: Camera,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Pre-built background stars (fixed seed, rebuilt only on quality change)
        starfield: Vec<SceneVertex>,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            Self {
                clock: SimulationClock::new(),
                camera: Camera::new(settings.view_mode),
                starfield: shapes::starfield(settings.quality.star_count(), colors::STAR),
                settings,
                render_state: None,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance simulation and camera by real elapsed time
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.clock.advance(dt);
            self.camera.update(dt);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Rebuild the scene triangle list from the authoritative angle.
        /// Draw order is back-to-front: background, orbit markers, arrows, body.
        fn build_scene(&self) -> Vec<SceneVertex> {
            let angle = self.clock.angle();
            let radius = self.clock.radius();
            let kin = self.clock.sample();

            let mut scene = Vec::new();

            match self.camera.mode() {
                ViewMode::TwoD => {
                    scene.extend(shapes::grid(40.0, 5.0, colors::GRID, colors::GRID_AXIS));
                }
                ViewMode::ThreeD => {
                    scene.extend(self.starfield.iter().copied());
                }
            }

            scene.extend(shapes::orbit_ring(radius, colors::ORBIT_RING, 128));
            scene.extend(shapes::radius_line(angle, radius, colors::RADIUS_LINE));
            scene.extend(shapes::angle_arc(angle, radius, colors::ANGLE_ARC));

            if self.settings.show_velocity {
                let dir = kin.velocity.normalize_or_zero() * ARROW_LENGTH_SCALE;
                scene.extend(shapes::arrow(kin.position, dir, colors::VELOCITY));
            }
            if self.settings.show_acceleration {
                let dir = kin.acceleration.normalize_or_zero() * ARROW_LENGTH_SCALE;
                scene.extend(shapes::arrow(kin.position, dir, colors::ACCELERATION));
            }

            scene.extend(shapes::disc(kin.position, 0.5, colors::BODY, 32));

            scene
        }

        /// Render the current frame
        fn render(&mut self) {
            let scene = self.build_scene();
            let view_proj = self
                .render_state
                .as_ref()
                .map(|rs| self.camera.view_proj(rs.aspect()));

            if let (Some(render_state), Some(view_proj)) = (self.render_state.as_mut(), view_proj)
            {
                match render_state.render(&scene, view_proj) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Refresh the numeric readout panel. Runs on the slow timer, not
        /// per frame.
        fn update_readout(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let kin = self.clock.sample();

            set_text(&document, "readout-accel", &format!("{:.3}", kin.accel_magnitude));
            set_text(&document, "readout-angle", &format!("{:.1}", self.clock.angle().to_degrees()));

            set_text(&document, "readout-pos-x", &format!("{:.3}", kin.position.x));
            set_text(&document, "readout-pos-y", &format!("{:.3}", kin.position.y));
            set_text(&document, "readout-pos-z", &format!("{:.3}", kin.position.z));

            set_text(&document, "readout-vel-x", &format!("{:.3}", kin.velocity.x));
            set_text(&document, "readout-vel-y", &format!("{:.3}", kin.velocity.y));
            set_text(&document, "readout-vel-z", &format!("{:.3}", kin.velocity.z));
            set_text(&document, "readout-vel-mag", &format!("{:.3}", kin.velocity.length()));

            set_text(&document, "readout-acc-x", &format!("{:.3}", kin.acceleration.x));
            set_text(&document, "readout-acc-y", &format!("{:.3}", kin.acceleration.y));
            set_text(&document, "readout-acc-z", &format!("{:.3}", kin.acceleration.z));

            set_text(&document, "readout-period", &format!("{:.3}", kin.period));
            set_text(&document, "readout-omega", &format!("{:.3}", kin.angular_speed));

            if self.settings.show_fps {
                set_text(&document, "readout-fps", &self.fps.to_string());
            }

            // Push the live angle back into the controls while playing, and
            // lock them so slider drags don't fight the animation. Paused
            // edits are left untouched.
            let playing = self.clock.is_playing();
            let degrees = self.clock.angle().to_degrees();
            for id in ["angle-slider", "angle-input"] {
                if let Some(input) = input_by_id(&document, id) {
                    if playing {
                        input.set_value(&format!("{:.1}", degrees));
                    }
                    input.set_disabled(playing);
                }
            }

            if let Some(el) = document.get_element_by_id("play-pause-btn") {
                el.set_text_content(Some(if playing { "⏸ Pause" } else { "▶ Play" }));
            }
        }
    }

    fn set_text(document: &Document, id: &str, value: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(value));
        }
    }

    fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbit Lab starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize application
        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_controls(&document, app.clone());
        setup_keyboard(app.clone());
        setup_auto_pause(app.clone());
        setup_readout_timer(app.clone());

        // Initial readout so the panel isn't blank before the timer fires
        {
            let a = app.borrow();
            set_text(
                &document,
                "view-toggle-btn",
                &format!("{} View", a.settings.view_mode.as_str()),
            );
            a.update_readout();
        }

        // Start animation loop
        request_animation_frame(app);

        log::info!("Orbit Lab running!");
    }

    /// Wire one scalar control pair (slider + number input) to a clock setter.
    fn wire_scalar_control(
        document: &Document,
        slider_id: &str,
        input_id: &str,
        min: f32,
        max: f32,
        app: Rc<RefCell<App>>,
        apply: fn(&mut SimulationClock, f32),
    ) {
        for (id, other_id) in [(slider_id, input_id), (input_id, slider_id)] {
            let Some(input) = input_by_id(document, id) else {
                continue;
            };
            let Some(other) = input_by_id(document, other_id) else {
                continue;
            };
            let app = app.clone();
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let raw = input_clone.value_as_number() as f32;
                if raw.is_nan() {
                    return;
                }
                let value = raw.clamp(min, max);
                apply(&mut app.borrow_mut().clock, value);
                other.set_value(&input_clone.value());
            });
            let _ =
                input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        // Angle travels as degrees in the UI, radians in the clock
        wire_scalar_control(document, "angle-slider", "angle-input", 0.0, 360.0, app.clone(), |clock, deg| {
            clock.set_angle(deg.to_radians());
        });
        wire_scalar_control(document, "speed-slider", "speed-input", MIN_SPEED, MAX_SPEED, app.clone(), |clock, v| {
            clock.set_speed(v);
        });
        wire_scalar_control(document, "radius-slider", "radius-input", MIN_RADIUS, MAX_RADIUS, app.clone(), |clock, r| {
            clock.set_radius(r);
        });

        // Play/pause toggle
        if let Some(btn) = document.get_element_by_id("play-pause-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                a.clock.toggle();
                a.update_readout();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset
        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                reset_app(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // 2D/3D view toggle
        if let Some(btn) = document.get_element_by_id("view-toggle-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                toggle_view_mode(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Reset clock and controls to defaults
    fn reset_app(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        a.clock.reset();

        let document = web_sys::window().unwrap().document().unwrap();
        let pairs: [(&str, f32); 6] = [
            ("angle-slider", 0.0),
            ("angle-input", 0.0),
            ("speed-slider", DEFAULT_SPEED),
            ("speed-input", DEFAULT_SPEED),
            ("radius-slider", DEFAULT_RADIUS),
            ("radius-input", DEFAULT_RADIUS),
        ];
        for (id, value) in pairs {
            if let Some(input) = input_by_id(&document, id) {
                input.set_value(&value.to_string());
            }
        }
        a.update_readout();
        log::info!("Simulation reset");
    }

    fn toggle_view_mode(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        let mode = a.settings.view_mode.toggled();
        a.settings.view_mode = mode;
        a.camera.set_mode(mode);
        a.settings.save();

        let document = web_sys::window().unwrap().document().unwrap();
        set_text(&document, "view-toggle-btn", &format!("{} View", mode.as_str()));
        log::info!("View mode: {}", mode.as_str());
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            match event.key().as_str() {
                " " => {
                    event.prevent_default();
                    let mut a = app.borrow_mut();
                    a.clock.toggle();
                    a.update_readout();
                }
                "r" | "R" => reset_app(&app),
                "v" | "V" => toggle_view_mode(&app),
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Pause when the tab is hidden
    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut a = app.borrow_mut();
                if a.clock.is_playing() {
                    a.clock.pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Slow readout loop, decoupled from the frame rate
    fn setup_readout_timer(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow().update_readout();
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                READOUT_INTERVAL_MS,
            )
            .expect("Failed to set readout interval");
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Actual elapsed time since the previous frame (variable timestep)
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                1.0 / 60.0
            };
            a.last_time = time;

            a.update(dt, time);
            a.render();
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
    log::info!("Orbit Lab (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_orbit_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the clock through one full revolution and print the sampled state.
#[cfg(not(target_arch = "wasm32"))]
fn headless_orbit_check() {
    use orbit_lab::sim::SimulationClock;
    use std::f32::consts::TAU;

    let mut clock = SimulationClock::new();
    clock.play();
    let period = clock.sample().period;
    let steps = 8;

    println!("\nOne revolution at v=5 m/s, R=10 m (T = {:.3} s):", period);
    for _ in 0..steps {
        let s = clock.sample();
        println!(
            "  θ = {:6.1}°  pos = ({:6.2}, {:6.2}) m  a = {:.2} m/s²",
            clock.angle().to_degrees(),
            s.position.x,
            s.position.z,
            s.accel_magnitude,
        );
        clock.advance(period / steps as f32);
    }

    let drift = clock.angle().min(TAU - clock.angle());
    assert!(drift < 1e-2, "angle should close after one period");
    println!("✓ Orbit closes after one period");
}
