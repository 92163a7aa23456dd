//! Application state for the interactive lab.

use super::animation::Spinner;
use super::editor::SourceEditor;
use super::lab_actions::{determine_lab_action, LabAction, LabActionContext};
use super::panel::AnalysisPanel;
use super::toast::ToastQueue;
use crate::catalog::{builtin_templates, templates::next_template_index, CodeTemplate};
use crate::session::{AnalysisController, AnalysisRequestState};
use crossterm::event::KeyEvent;

const TAB_WIDTH: usize = 2;

/// Editor, request controller and toasts of one lab session.
///
/// Owned by the UI loop, which is the only writer of the request state:
/// key presses go through [`LabApp::handle_key`] and engine completions are
/// applied by [`LabApp::tick`].
pub struct LabApp {
    editor: SourceEditor,
    controller: AnalysisController,
    toasts: ToastQueue,
    templates: Vec<CodeTemplate>,
    template_index: Option<usize>,
    language: String,
    spinner: Spinner,
    should_quit: bool,
}

impl LabApp {
    /// `toasts` should be the sink the controller notifies.
    pub fn new(
        controller: AnalysisController,
        toasts: ToastQueue,
        language: impl Into<String>,
    ) -> Self {
        let editor = SourceEditor::new(controller.state().source());
        Self {
            editor,
            controller,
            toasts,
            templates: builtin_templates(),
            template_index: None,
            language: language.into(),
            spinner: Spinner::default(),
            should_quit: false,
        }
    }

    pub fn editor(&self) -> &SourceEditor {
        &self.editor
    }

    pub fn state(&self) -> &AnalysisRequestState {
        self.controller.state()
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Name of the template last loaded into the editor.
    pub fn template_name(&self) -> Option<&str> {
        self.template_index
            .and_then(|i| self.templates.get(i))
            .map(|t| t.name)
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn panel(&self) -> AnalysisPanel {
        AnalysisPanel::from_state(self.controller.state())
    }

    pub fn context(&self) -> LabActionContext {
        let state = self.controller.state();
        LabActionContext {
            can_analyze: state.can_analyze(),
            has_error: state.error().is_some(),
            in_flight: state.is_in_flight(),
        }
    }

    /// Map and execute a key press. Returns whether it did anything.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match determine_lab_action(key, self.context()) {
            Some(action) => {
                self.execute(action);
                true
            }
            None => false,
        }
    }

    /// Apply engine completions that arrived since the last tick.
    pub fn tick(&mut self) -> usize {
        if self.controller.state().is_in_flight() {
            self.spinner.tick();
        }
        self.controller.drain_completions()
    }

    /// Cancel any in-flight request; used when the view is torn down.
    pub fn shutdown(&mut self) {
        if self.controller.state().is_in_flight() {
            log::debug!("Lab closing with a request in flight, cancelling");
            self.controller.cancel();
        }
    }

    pub fn execute(&mut self, action: LabAction) {
        match action {
            LabAction::Quit => self.should_quit = true,
            LabAction::Run => {
                self.controller.run();
            }
            LabAction::Analyze => {
                self.controller.begin_analysis();
            }
            LabAction::DismissError => {
                self.controller.dismiss_error();
            }
            LabAction::CancelAnalysis => {
                self.controller.cancel();
            }
            LabAction::NextTemplate => self.load_next_template(),
            LabAction::InsertChar(c) => {
                self.editor.insert_char(c);
                self.sync_source();
            }
            LabAction::InsertNewline => {
                self.editor.insert_newline();
                self.sync_source();
            }
            LabAction::InsertTab => {
                for _ in 0..TAB_WIDTH {
                    self.editor.insert_char(' ');
                }
                self.sync_source();
            }
            LabAction::Backspace => {
                if self.editor.backspace() {
                    self.sync_source();
                }
            }
            LabAction::Delete => {
                if self.editor.delete() {
                    self.sync_source();
                }
            }
            LabAction::MoveLeft => self.editor.move_left(),
            LabAction::MoveRight => self.editor.move_right(),
            LabAction::MoveUp => self.editor.move_up(),
            LabAction::MoveDown => self.editor.move_down(),
            LabAction::MoveHome => self.editor.move_home(),
            LabAction::MoveEnd => self.editor.move_end(),
        }
    }

    fn load_next_template(&mut self) {
        let Some(index) = next_template_index(self.template_index, self.templates.len()) else {
            return;
        };
        self.template_index = Some(index);
        let template = &self.templates[index];
        log::debug!("Loading template {}", template.name);
        self.editor.set_text(template.body);
        self.sync_source();
    }

    fn sync_source(&mut self) {
        self.controller.set_source(self.editor.text());
    }
}
