use macroquad::window::{Conf, next_frame};

use immersive_host::host_app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "Immersive".to_string(),
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = App::new();
    while app.tick() {
        next_frame().await;
    }
}
