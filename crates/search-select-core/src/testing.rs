//! Headless harness for exercising a [`Model`] in unit tests.

use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use crate::subscription::SubscriptionId;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Drives a [`Model`] without a real terminal or tokio runtime.
///
/// Messages returned through [`Command::message`] are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Subscriptions are never
/// started, but [`subscription_ids`](TestProgram::subscription_ids) shows what
/// the runtime would be running after the last update.
///
/// ```rust,ignore
/// use search_select_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Picker>::new(());
/// prog.send(Msg::Key(key(KeyCode::Down)));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 6).contains("Apple"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle. Messages the update
    /// produces are queued, not processed.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process queued messages until the model stops producing new ones.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Number of messages waiting in the queue.
    pub fn pending(&self) -> usize {
        self.pending_messages.len()
    }

    /// Whether any update so far returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Ids of the subscriptions the model currently declares.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.model
            .subscriptions()
            .iter()
            .map(|s| s.id().clone())
            .collect()
    }

    /// Shared access to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model for test setup, bypassing `update`.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model into a buffer of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return its rows joined by newlines.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer into text, one line per row.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::Subscription;
    use crate::subscriptions::terminal_events;
    use ratatui::widgets::Paragraph;

    // A checklist that can be shown or hidden; while shown it listens for keys.
    struct Checklist {
        items: Vec<String>,
        visible: bool,
    }

    #[derive(Debug)]
    enum Msg {
        Add(String),
        AddTwice(String),
        Toggle,
        Done,
    }

    impl Model for Checklist {
        type Message = Msg;
        type Flags = Vec<String>;

        fn init(items: Vec<String>) -> (Self, Command<Msg>) {
            (
                Checklist {
                    items,
                    visible: true,
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Add(item) => {
                    self.items.push(item);
                    Command::none()
                }
                Msg::AddTwice(item) => Command::batch([
                    Command::message(Msg::Add(item.clone())),
                    Command::message(Msg::Add(item)),
                ]),
                Msg::Toggle => {
                    self.visible = !self.visible;
                    Command::none()
                }
                Msg::Done => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            if self.visible {
                frame.render_widget(Paragraph::new(self.items.join(",")), frame.area());
            }
        }

        fn subscriptions(&self) -> Vec<Subscription<Msg>> {
            if self.visible {
                vec![terminal_events(|_| Some(Msg::Toggle))]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Checklist>::new(vec!["milk".into()]);
        assert_eq!(prog.model().items, vec!["milk"]);
    }

    #[test]
    fn batched_messages_queue_until_drained() {
        let mut prog = TestProgram::<Checklist>::new(vec![]);
        prog.send(Msg::AddTwice("eggs".into()));
        assert_eq!(prog.pending(), 2);
        assert!(prog.model().items.is_empty());

        prog.drain_messages();
        assert_eq!(prog.pending(), 0);
        assert_eq!(prog.model().items, vec!["eggs", "eggs"]);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Checklist>::new(vec![]);
        assert!(!prog.quit_requested());
        prog.send(Msg::Done);
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_reflects_state() {
        let mut prog = TestProgram::<Checklist>::new(vec!["a".into()]);
        prog.send(Msg::Add("b".into()));
        assert!(prog.render_string(10, 1).starts_with("a,b"));

        prog.send(Msg::Toggle);
        assert_eq!(prog.render_string(3, 2), "   \n   ");
    }

    #[test]
    fn subscription_ids_follow_visibility() {
        let mut prog = TestProgram::<Checklist>::new(vec![]);
        assert_eq!(prog.subscription_ids().len(), 1);
        prog.send(Msg::Toggle);
        assert!(prog.subscription_ids().is_empty());
    }
}
