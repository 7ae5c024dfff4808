/// Terminal-based wireframe viewer for axonometric projections
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use ax3d_core::{Axonometry, Figure, Transform};

pub mod renderer;

pub use renderer::WireframeRenderer;

/// Radians per tilt or spin keypress.
const KEY_STEP: f64 = 0.1;
/// Radians of continuous spin per frame.
const SPIN_STEP: f64 = 0.03;
/// Units of continuous drift per frame.
const DRIFT_STEP: f64 = 0.15;
/// Length of the reference axes.
const AXES_LENGTH: f64 = 20.0;

/// Main application struct for the terminal wireframe viewer
pub struct TerminalApp {
    template: Figure,
    figure: Figure,
    axes: Figure,
    renderer: WireframeRenderer,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(figure: Figure, basis: Axonometry) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut renderer = WireframeRenderer::new(width as usize, height as usize);
        renderer.fit_to(&figure);

        Ok(Self {
            template: figure.clone(),
            axes: Figure::axes(AXES_LENGTH, basis),
            figure,
            renderer,
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.figure.transform(&Transform::rotation_x(KEY_STEP));
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.figure.transform(&Transform::rotation_x(-KEY_STEP));
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.figure.transform(&Transform::rotation_y(-KEY_STEP));
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.figure.transform(&Transform::rotation_y(KEY_STEP));
                }
                KeyCode::Char('e') => {
                    self.figure.transform(&Transform::rotation_z(KEY_STEP));
                }
                KeyCode::Char('r') => {
                    self.figure.transform(&Transform::rotation_z(-KEY_STEP));
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.renderer.scale *= 1.25;
                }
                KeyCode::Char('-') => {
                    self.renderer.scale /= 1.25;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('c') => {
                    self.figure = self.template.clone();
                    self.renderer.fit_to(&self.figure);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        if self.paused {
            return;
        }
        // Continuous motion: drift along -X/-Y through the direct setters,
        // then spin about Z. The spin folds the drift back towards the
        // origin, so the figure orbits instead of escaping.
        for point in &mut self.figure.points {
            point.set_x(point.x() - DRIFT_STEP);
            point.set_y(point.y() - DRIFT_STEP);
        }
        self.figure.transform(&Transform::rotation_z(SPIN_STEP));
    }

    fn render(&mut self) -> io::Result<()> {
        // Clear renderer
        self.renderer.clear();

        // Reference axes behind the figure
        self.renderer.render_figure(&self.axes, '+', Color::Red);
        self.renderer.render_figure(&self.figure, '*', Color::White);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "AX3D Wireframe | FPS: {:.1} | WASD/Arrows=Tilt E/R=Spin +/-=Zoom Space=Pause C=Reset Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
