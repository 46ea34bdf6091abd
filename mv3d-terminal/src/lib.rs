//! Terminal viewer for meshes loaded through `mv3d_core`
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, info, warn};
use mv3d_core::{Axis, Session, Transform};
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub mod args;
pub mod config;
pub mod projection;
pub mod renderer;
pub mod style;

pub use args::Args;
pub use config::ViewerConfig;
pub use projection::{Camera, Projection};
pub use renderer::WireframeRenderer;
pub use style::{LineStyle, RenderStyle, VertexStyle};

/// What a key press asks the viewer to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Edit(Transform),
    /// Start typing a path on the status row
    Prompt,
    Load(PathBuf),
    ToggleProjection,
    CycleVertices,
    CycleLines,
}

/// Map a key to its action, using the step sizes from `config`
pub fn key_action(code: KeyCode, config: &ViewerConfig) -> Option<Action> {
    let rotate = |axis, sign: f32| {
        Action::Edit(Transform::Rotate {
            axis,
            angle: sign * config.rotate_step,
        })
    };
    let translate = |axis, sign: f32| {
        Action::Edit(Transform::Translate {
            axis,
            amount: sign * config.translate_step,
        })
    };

    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('w') => rotate(Axis::X, 1.0),
        KeyCode::Char('s') => rotate(Axis::X, -1.0),
        KeyCode::Char('a') => rotate(Axis::Y, -1.0),
        KeyCode::Char('d') => rotate(Axis::Y, 1.0),
        KeyCode::Char('e') => rotate(Axis::Z, 1.0),
        KeyCode::Char('r') => rotate(Axis::Z, -1.0),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            Action::Edit(Transform::Scale(config.scale_step))
        }
        KeyCode::Char('-') => Action::Edit(Transform::Scale(1.0 / config.scale_step)),
        KeyCode::Left => translate(Axis::X, -1.0),
        KeyCode::Right => translate(Axis::X, 1.0),
        KeyCode::Up => translate(Axis::Y, 1.0),
        KeyCode::Down => translate(Axis::Y, -1.0),
        KeyCode::PageUp => translate(Axis::Z, 1.0),
        KeyCode::PageDown => translate(Axis::Z, -1.0),
        KeyCode::Char('o') => Action::Prompt,
        KeyCode::Char('p') => Action::ToggleProjection,
        KeyCode::Char('v') => Action::CycleVertices,
        KeyCode::Char('l') => Action::CycleLines,
        _ => return None,
    };
    Some(action)
}

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    session: Session,
    config: ViewerConfig,
    camera: Camera,
    renderer: WireframeRenderer,
    style: RenderStyle,
    /// Path being typed after `o`, if any
    prompt: Option<String>,
    /// Outcome of the last load, shown on the status row
    message: Option<String>,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(session: Session, config: ViewerConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self::with_size(session, config, width, height))
    }

    /// Build a viewer for a terminal of `width` x `height` cells. The last
    /// row is kept for the status line.
    pub fn with_size(session: Session, config: ViewerConfig, width: u16, height: u16) -> Self {
        let (width, rows) = viewport(width, height);
        let mut camera = Camera::new(width as u32, rows as u32, config.projection);
        camera.fit(session.geometry().bounds());

        Self {
            session,
            style: config.style,
            config,
            camera,
            renderer: WireframeRenderer::new(width, rows),
            prompt: None,
            message: None,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn projection(&self) -> Projection {
        self.camera.projection
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the mesh with the file at `path`.
    ///
    /// A failure is reported on the status row and leaves the view empty.
    pub fn load(&mut self, path: PathBuf) {
        match self.session.load(&path) {
            Ok(()) => {
                self.message = None;
                self.camera.fit(self.session.geometry().bounds());
            }
            Err(err) => {
                warn!("{err}");
                self.message = Some(format!("Load failed: {err}"));
            }
        }
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

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if self.prompt.is_some() {
                    self.edit_prompt(code);
                } else if let Some(action) = key_action(code, &self.config) {
                    self.perform(action);
                }
            }
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    fn edit_prompt(&mut self, code: KeyCode) {
        let Some(input) = self.prompt.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                if let Some(path) = self.prompt.take().filter(|p| !p.trim().is_empty()) {
                    self.perform(Action::Load(PathBuf::from(path.trim())));
                }
            }
            _ => {}
        }
    }

    pub fn perform(&mut self, action: Action) {
        debug!("{action:?}");
        match action {
            Action::Quit => self.running = false,
            Action::Edit(t) => self.session.apply(t),
            Action::Prompt => self.prompt = Some(String::new()),
            Action::Load(path) => self.load(path),
            Action::ToggleProjection => {
                self.camera.projection = self.camera.projection.toggled();
                self.camera.fit(self.session.geometry().bounds());
                info!("projection: {:?}", self.camera.projection);
            }
            Action::CycleVertices => self.style.vertices = self.style.vertices.next(),
            Action::CycleLines => self.style.lines = self.style.lines.next(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let (width, rows) = viewport(width, height);
        self.renderer.resize(width, rows);
        self.camera.resize(width as u32, rows as u32);
        self.camera.fit(self.session.geometry().bounds());
    }

    /// One-line summary of the loaded mesh, the open prompt, or the last load error
    pub fn status_line(&self) -> String {
        if let Some(input) = &self.prompt {
            return format!("Open: {input}_");
        }
        let counts = format!(
            "{} | V: {} E: {} I: {}",
            self.session.file_name().unwrap_or("<untitled>"),
            self.session.vertex_count(),
            self.session.edge_count(),
            self.session.face_index_count(),
        );
        match &self.message {
            Some(message) => format!("{counts} | {message}"),
            None => format!(
                "{counts} | {:?} | FPS: {:.1} | wasd/er=Rotate +/-=Scale Arrows/PgUp/PgDn=Move o=Open p/v/l=View q=Quit",
                self.camera.projection, self.fps
            ),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer
            .render(self.session.geometry(), &self.camera, self.style);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        let (width, height) = terminal::size()?;
        let status: String = self.status_line().chars().take(width as usize).collect();
        queue!(
            stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

/// Drawable area for a terminal size, leaving one row for the status line
fn viewport(width: u16, height: u16) -> (usize, usize) {
    (width.max(1) as usize, height.saturating_sub(1).max(1) as usize)
}
