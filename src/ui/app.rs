//! Main TUI application state and logic

use crate::animation::clock::{MonotonicTime, TimeSource};
use crate::animation::controller::AnimationController;
use crate::animation::runner::Runner;
use crate::config::{Config, MAX_ARRAY_SIZE, MAX_SPEED, MIN_ARRAY_SIZE, MIN_SPEED};
use crate::operations::listings::listing;
use crate::operations::{run_operation, Operation, OperationParams, OperationRequest, ParamField};
use crate::scene::{CursorSink, Scene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

/// How long the event loop waits for input before polling the animation again
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Speed change per ↑/↓ press
const SPEED_STEP: Duration = Duration::from_millis(100);

/// Fresh array contents, values in `1..=99`
pub fn random_array(size: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(1..=99)).collect()
}

/// The main application state
pub struct App {
    pub scene: Rc<RefCell<Scene>>,
    pub controller: Rc<AnimationController>,
    pub runner: Runner,
    pub config: Config,

    /// Operation selected in the controls pane
    pub operation: Operation,
    pub params: OperationParams,

    /// Position in `operation.fields()` receiving typed digits
    pub field_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create an app with a random array and the wall clock
    pub fn new(config: Config) -> Self {
        let array = random_array(config.size);
        App::with_parts(config, array, Rc::new(MonotonicTime::new()))
    }

    /// Create an app around a given array and time source
    pub fn with_parts(config: Config, array: Vec<i64>, time: Rc<dyn TimeSource>) -> Self {
        let scene = Rc::new(RefCell::new(Scene::new(array)));
        let controller = Rc::new(AnimationController::new(scene.clone(), time, config.speed));
        let runner = Runner::new(controller.clone());
        App {
            scene,
            controller,
            runner,
            config,
            operation: Operation::Search,
            params: OperationParams::default(),
            field_index: 0,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(FRAME_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.runner.cancel();
        Ok(())
    }

    /// Advance the running operation if its pause has elapsed
    pub fn tick(&mut self) {
        if self.runner.is_running() {
            self.runner.poll();
        }
    }

    pub fn focused_field(&self) -> Option<ParamField> {
        let fields = self.operation.fields();
        fields.get(self.field_index % fields.len().max(1)).copied()
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let scene = self.scene.borrow();
        let cursor = scene.cursor();
        let is_playing = self.runner.is_running();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Array (top) | Code (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Controls (top) | Memory (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_array_pane(
            frame,
            left_rows[0],
            super::panes::ArrayRenderData {
                values: scene.displayed_array(),
                element_states: scene.element_states(),
                active_element: cursor.active_element,
                is_working_copy: scene.working_array().is_some(),
            },
            false,
        );

        super::panes::render_code_pane(
            frame,
            left_rows[1],
            super::panes::CodeRenderData {
                listing: listing(self.operation, self.config.language),
                language: self.config.language.label(),
                current_line: cursor.code_line,
                status: &cursor.status,
                is_running: is_playing,
            },
            is_playing,
        );

        super::panes::render_controls_pane(
            frame,
            right_rows[0],
            super::panes::ControlsRenderData {
                operation: self.operation,
                params: &self.params,
                focused_field: self.focused_field(),
                speed: self.controller.speed(),
                size: self.config.size,
                language: self.config.language,
                capacity: self.config.capacity,
            },
            !is_playing,
        );

        super::panes::render_memory_pane(
            frame,
            right_rows[1],
            super::panes::MemoryRenderData {
                stack_frame: scene.stack_frame(),
                heap: scene.displayed_array(),
                active_memory: cursor.active_memory,
                element_states: scene.element_states(),
            },
            false,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                iteration: cursor.iteration,
                found: cursor.found,
                last_outcome: scene.last_outcome(),
                is_playing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => self.select_operation(self.operation.prev()),
            KeyCode::Right => self.select_operation(self.operation.next()),
            KeyCode::Tab => {
                self.field_index = (self.field_index + 1) % self.operation.fields().len();
            }
            KeyCode::Char(c @ ('0'..='9' | '-')) => {
                if let Some(field) = self.focused_field() {
                    self.params.get_mut(field).push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.params.get_mut(field).pop();
                }
            }
            // Up shortens the pause between steps
            KeyCode::Up => self.adjust_speed(false),
            KeyCode::Down => self.adjust_speed(true),
            KeyCode::Char('[') => self.resize(self.config.size.saturating_sub(1)),
            KeyCode::Char(']') => self.resize(self.config.size + 1),
            KeyCode::Char('g') => self.regenerate(),
            KeyCode::Char('l') => {
                self.runner.cancel();
                self.config.language = self.config.language.next();
                info!(language = %self.config.language, "language changed");
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start_operation(),
            KeyCode::Esc | KeyCode::Char('s') => {
                if self.runner.is_running() {
                    self.runner.cancel();
                    info!("operation stopped by user");
                }
            }
            _ => {}
        }
    }

    /// Kick off the selected operation against the current array
    pub fn start_operation(&mut self) {
        let request = OperationRequest {
            operation: self.operation,
            array: self.scene.borrow().array().to_vec(),
            params: self.params.clone(),
            language: self.config.language,
            capacity: self.config.capacity,
        };
        let controller = self.controller.clone();
        self.runner.spawn(async move {
            // The outcome is already on the status line
            let _ = run_operation(controller, request).await;
        });
        self.runner.poll();
    }

    fn select_operation(&mut self, operation: Operation) {
        if operation != self.operation {
            self.runner.cancel();
            self.operation = operation;
            self.field_index = 0;
        }
    }

    fn adjust_speed(&mut self, slower: bool) {
        let current = self.controller.speed();
        let speed = if slower {
            current.saturating_add(SPEED_STEP)
        } else {
            current.saturating_sub(SPEED_STEP)
        }
        .clamp(MIN_SPEED, MAX_SPEED);
        self.controller.set_speed(speed);
        self.config.speed = speed;
        debug!(speed_ms = speed.as_millis() as u64, "speed changed");
    }

    fn max_size(&self) -> usize {
        if self.config.language.is_fixed_capacity() {
            MAX_ARRAY_SIZE.min(self.config.capacity).max(MIN_ARRAY_SIZE)
        } else {
            MAX_ARRAY_SIZE
        }
    }

    fn resize(&mut self, size: usize) {
        let size = size.clamp(MIN_ARRAY_SIZE, self.max_size());
        if size != self.config.size {
            self.config.size = size;
            self.regenerate();
        }
    }

    /// Replace the array with fresh random values, stopping any run
    pub fn regenerate(&mut self) {
        self.runner.cancel();
        let values = random_array(self.config.size);
        info!(size = values.len(), "array regenerated");
        {
            let mut scene = self.scene.borrow_mut();
            scene.set_array(values);
            scene.set_outcome(None);
        }
        self.controller
            .reset_with_status(format!("Generated a new array of {} elements", self.config.size));
    }
}
