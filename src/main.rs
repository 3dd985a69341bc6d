// src/main.rs
use log::{debug, error, info};
use nannou::prelude::*;
use rand::Rng;

use flarevis::{
    config::*,
    controllers::OscController,
    draw::DrawCommand,
    effects::{Control, EffectCommand, EffectKind, EffectsManager},
    render::{CanvasRenderer, Transform2D},
};

struct Model {
    // Core components:
    manager: EffectsManager,
    selected: usize,
    commands: Vec<DrawCommand>,

    // Comms components:
    osc_controller: OscController,

    // Rendering components:
    renderer: CanvasRenderer,
    canvas_size: Vec2,
    background: Rgb,

    // Message
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    info!("loaded config: {:?}", config);

    // Create OSC controller
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    info!("listening for OSC on port {}", config.osc.rx_port);

    // Create window
    app.new_window()
        .title(concat!("flarevis ", env!("CARGO_PKG_VERSION")))
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    let canvas_size = vec2(config.canvas.size, config.canvas.size);
    let transform = Transform2D::fit(canvas_size, app.window_rect().wh());
    let renderer = CanvasRenderer::new(canvas_size, transform, &config.rendering);
    let [r, g, b] = config.style.background;

    Model {
        manager: EffectsManager::new(),
        selected: 0,
        commands: Vec::new(),

        osc_controller,

        renderer,
        canvas_size,
        background: rgb(r, g, b),

        debug_flag: false,
    }
}

fn selected_kind(model: &Model) -> EffectKind {
    EffectKind::all()[model.selected]
}

fn apply(model: &mut Model, command: EffectCommand) {
    debug!("applying {:?}", command);
    if let Err(e) = model.manager.apply(command) {
        error!("rejected edit: {}", e);
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let count = EffectKind::all().len();
    let kind = selected_kind(model);
    match key {
        Key::Up => {
            model.selected = (model.selected + count - 1) % count;
            info!("selected {}", selected_kind(model));
        }
        Key::Down => {
            model.selected = (model.selected + 1) % count;
            info!("selected {}", selected_kind(model));
        }
        Key::Space => apply(model, EffectCommand::Toggle(kind)),
        Key::Left | Key::Right => {
            let step = if key == Key::Right { 1 } else { -1 };
            let seed = model.manager.get(kind).seed().wrapping_add(step);
            apply(model, EffectCommand::Seed { kind, seed });
        }
        Key::R => {
            let seed = rand::thread_rng().gen::<i32>();
            apply(model, EffectCommand::Seed { kind, seed });
        }
        Key::P => log_settings(model.manager.settings(kind)),
        Key::D => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn log_settings(controls: Vec<Control>) {
    for control in controls {
        match control {
            Control::Heading { label } => info!("== {} ==", label),
            Control::Switch { label, value, .. } => info!("{}: {}", label, value),
            Control::IntSlider {
                label,
                value,
                min,
                max,
                ..
            } => info!("{}: {} [{}, {}]", label, value, min, max),
            Control::FloatSlider {
                label,
                value,
                min,
                max,
                ..
            } => info!("{}: {:.3} [{:.3}, {:.3}]", label, value, min, max),
        }
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    model.osc_controller.process_messages();
    for command in model.osc_controller.take_commands() {
        apply(model, command);
    }

    // Keep the canvas fitted to the window
    model
        .renderer
        .set_transform(Transform2D::fit(model.canvas_size, app.window_rect().wh()));

    // Every frame is drawn from scratch from the current snapshots
    model.commands = model.manager.render(model.canvas_size);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    model.renderer.draw(&draw, rgba(0.0, 0.0, 0.0, 1.0), &model.commands);

    if model.debug_flag {
        let rect = app.window_rect();
        let kind = selected_kind(model);
        let text = format!(
            "{} ({})\nshow: {}  seed: {}\ncommands: {}",
            model.manager.get(kind).name(),
            kind,
            model.manager.get(kind).show(),
            model.manager.get(kind).seed(),
            model.commands.len(),
        );
        draw.text(&text)
            .color(RED)
            .left_justify()
            .align_text_top()
            .w_h(300.0, 80.0)
            .x_y(rect.left() + 160.0, rect.top() - 50.0);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {:?}", e);
    }
}
