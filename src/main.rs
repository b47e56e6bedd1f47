use arboard::Clipboard;
use macroquad::prelude::*;
use mazerunner::{Algorithm, Config, Direction, Game};

const PATH_COLOR: Color = Color::new(1.0, 1.0, 0.4, 1.0);
const PLAYER_COLOR: Color = Color::new(1.0, 0.2, 0.2, 1.0);
const GOAL_COLOR: Color = Color::new(0.2, 0.78, 0.2, 1.0);
const BUTTON_COLOR: Color = Color::new(0.2, 0.2, 1.0, 1.0);
const ACTIVE_COLOR: Color = Color::new(0.12, 0.12, 0.6, 1.0);
const IDLE_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);

/// Clickable HUD controls
enum ButtonAction {
    ShowPath,
    HidePath,
    Restart,
    Select(Algorithm),
}

struct Button {
    rect: Rect,
    label: &'static str,
    action: ButtonAction,
}

/// Visualization state
struct MazeView {
    game: Game,
    tile_size: f32,
    hud_height: f32,
    background: Color,
    buttons: Vec<Button>,
}

impl MazeView {
    fn new(game: Game, config: &Config) -> Self {
        let tile_size = config.grid.tile_size;
        let top = game.grid().size() as f32 * tile_size;
        let mut buttons = vec![
            Button { rect: Rect::new(10.0, top + 50.0, 150.0, 35.0), label: "Show path", action: ButtonAction::ShowPath },
            Button { rect: Rect::new(170.0, top + 50.0, 150.0, 35.0), label: "Hide path", action: ButtonAction::HidePath },
            Button { rect: Rect::new(330.0, top + 50.0, 150.0, 35.0), label: "Restart", action: ButtonAction::Restart },
        ];
        let mut x = 10.0;
        for algorithm in Algorithm::ALL {
            let width = if algorithm == Algorithm::Dijkstra { 100.0 } else { 80.0 };
            buttons.push(Button {
                rect: Rect::new(x, top + 100.0, width, 30.0),
                label: algorithm.name(),
                action: ButtonAction::Select(algorithm),
            });
            x += width + 10.0;
        }

        MazeView {
            game,
            tile_size,
            hud_height: config.visual.hud_height,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
            buttons,
        }
    }

    fn handle_keys(&mut self) {
        let bindings = [
            (KeyCode::Left, KeyCode::A, Direction::Left),
            (KeyCode::Right, KeyCode::D, Direction::Right),
            (KeyCode::Up, KeyCode::W, Direction::Up),
            (KeyCode::Down, KeyCode::S, Direction::Down),
        ];
        for (arrow, letter, direction) in bindings {
            if is_key_pressed(arrow) || is_key_pressed(letter) {
                self.game.move_player(direction);
            }
        }
    }

    fn handle_click(&mut self, mouse_x: f32, mouse_y: f32) {
        let point = vec2(mouse_x, mouse_y);
        let Some(button) = self.buttons.iter().find(|b| b.rect.contains(point)) else {
            return;
        };

        match button.action {
            ButtonAction::ShowPath => self.game.toggle_show_path(true),
            ButtonAction::HidePath => self.game.toggle_show_path(false),
            ButtonAction::Restart => self.game.restart(),
            ButtonAction::Select(algorithm) => self.game.set_algorithm(algorithm),
        }
    }

    fn copy_to_clipboard(&self) {
        let text = self.game.grid().to_text(self.game.path(), Some(self.game.player()));
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&text) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Maze layout copied to clipboard!");
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background);

        let grid = self.game.grid();
        let ts = self.tile_size;
        for y in 0..grid.size() {
            for x in 0..grid.size() {
                let px = x as f32 * ts;
                let py = y as f32 * ts;
                let color = if grid.is_free(x, y) { WHITE } else { BLACK };
                draw_rectangle(px, py, ts, ts, color);
                draw_rectangle_lines(px, py, ts, ts, 1.0, IDLE_COLOR);
            }
        }

        for pos in self.game.displayed_path() {
            draw_rectangle(pos.x as f32 * ts, pos.y as f32 * ts, ts, ts, PATH_COLOR);
        }

        let player = self.game.player();
        let goal = self.game.goal();
        draw_rectangle(player.x as f32 * ts, player.y as f32 * ts, ts, ts, PLAYER_COLOR);
        draw_rectangle(goal.x as f32 * ts, goal.y as f32 * ts, ts, ts, GOAL_COLOR);

        self.draw_hud();
    }

    fn draw_hud(&self) {
        let top = self.game.grid().size() as f32 * self.tile_size;
        let width = screen_width();

        draw_text(&format!("Steps left: {}", self.game.steps_left()), 10.0, top + 25.0, 24.0, BLACK);
        draw_text(&format!("Level: {}", self.game.level()), width - 150.0, top + 25.0, 24.0, BLACK);
        draw_text(&format!("Algorithm: {}", self.game.algorithm_name()), 10.0, top + 145.0, 24.0, BLACK);

        for button in &self.buttons {
            let color = match button.action {
                ButtonAction::HidePath if self.game.show_path() => ACTIVE_COLOR,
                ButtonAction::HidePath => IDLE_COLOR,
                ButtonAction::Select(algorithm) if algorithm == self.game.algorithm() => ACTIVE_COLOR,
                ButtonAction::Select(_) => IDLE_COLOR,
                _ => BUTTON_COLOR,
            };
            let r = button.rect;
            draw_rectangle(r.x, r.y, r.w, r.h, color);
            draw_text(button.label, r.x + 10.0, r.y + r.h * 0.65, 22.0, WHITE);
        }

        let banner = if self.game.is_won() {
            Some(("You won!", Color::new(0.0, 0.7, 0.0, 1.0)))
        } else if self.game.is_lost() {
            Some(("You lost!", Color::new(0.78, 0.0, 0.0, 1.0)))
        } else {
            None
        };
        if let Some((message, color)) = banner {
            let size = measure_text(message, None, 48, 1.0);
            let height = top + self.hud_height;
            draw_text(message, (width - size.width) / 2.0, (height - size.height) / 2.0, 48.0, color);
        }
    }
}

fn window_conf() -> Conf {
    let config = Config::load();
    let side = config.grid.size as f32 * config.grid.tile_size;
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: side as i32,
        window_height: (side + config.visual.hud_height) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load();
    let game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start game: {}", e);
            return;
        }
    };
    let mut view = MazeView::new(game, &config);

    loop {
        view.handle_keys();

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mouse_x, mouse_y) = mouse_position();
            view.handle_click(mouse_x, mouse_y);
        }

        // Copy maze to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            view.copy_to_clipboard();
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        view.game.update();
        view.draw();

        next_frame().await
    }

    let log = view.game.action_log();
    println!("{}", log.summary());
    if config.logging.enable_action_log {
        log.print();
        match log.save_to_file(&config.logging.action_log_path) {
            Ok(()) => println!("Action log written to {}", config.logging.action_log_path),
            Err(e) => eprintln!("Failed to write action log: {}", e),
        }
    }
}
