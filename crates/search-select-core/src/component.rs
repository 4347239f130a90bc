use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` differs from [`Model`](crate::Model) in one respect: its
/// [`view`](Component::view) method receives an `area: Rect`, so a parent
/// decides *where* each child renders by handing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message, map the
/// child's commands with [`Command::map`], and collect the child's
/// subscriptions while it is mounted:
///
/// ```rust,ignore
/// use search_select_core::{Command, Component, Model, Subscription};
/// use ratatui::Frame;
///
/// struct App { fruit: Autocomplete<&'static str> }
///
/// enum AppMsg { Fruit(autocomplete::Message<&'static str>) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) { /* ... */ }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Fruit(m) => self.fruit.update(m).map(AppMsg::Fruit),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.fruit.view(frame, frame.area());
///     }
///
///     fn subscriptions(&self) -> Vec<Subscription<AppMsg>> {
///         self.fruit
///             .subscriptions()
///             .into_iter()
///             .map(|s| s.map(AppMsg::Fruit))
///             .collect()
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Overlays (such as a dropdown list) may draw below `area`, but never
    /// outside the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these while the component is mounted and returns
    /// them from its own [`Model::subscriptions`](crate::Model::subscriptions).
    /// When the parent stops returning them, the runtime cancels them.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
