use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a notification stays at rest before dismissing itself.
pub const VISIBLE_MS: u32 = 5_000;
/// Nudge delay between insertion and the slide-in transition.
pub const ENTER_MS: u32 = 100;
/// Duration of the slide-out transition before the element is removed.
pub const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
            Severity::Info => "notification-info",
        }
    }
}

/// Display state of one notification instance.
///
/// Dismissal is a one-way door: once `Leaving` has begun, neither the close
/// button nor the auto-dismiss timer can re-trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

impl Phase {
    /// The enter transition has finished.
    pub fn settled(self) -> Self {
        match self {
            Phase::Entering => Phase::Visible,
            other => other,
        }
    }

    /// Begin dismissal. `None` means dismissal already started and the
    /// caller must do nothing.
    pub fn dismissed(self) -> Option<Self> {
        match self {
            Phase::Entering | Phase::Visible => Some(Phase::Leaving),
            Phase::Leaving | Phase::Removed => None,
        }
    }

    /// The exit transition has finished.
    pub fn finished(self) -> Self {
        match self {
            Phase::Leaving => Phase::Removed,
            other => other,
        }
    }

    /// Off-screen positions: before the slide-in and during/after the
    /// slide-out.
    pub fn is_offscreen(self) -> bool {
        !matches!(self, Phase::Visible)
    }
}

/// Value held by a notification host's slot. The `id` keys the rendered
/// component, so replacing the slot remounts it and the predecessor's timers
/// are dropped with its effects.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Builds the slot's next occupant, bumping the sequence that keys the
/// rendered component. The caller overwrites its slot with the result, which
/// is what discards any notification still on screen.
pub fn replace_slot(seq: &mut u32, message: String, severity: Severity) -> NotificationRequest {
    *seq = seq.wrapping_add(1);
    NotificationRequest {
        id: *seq,
        message,
        severity,
    }
}

enum ToastAction {
    Settle,
    Dismiss,
    Finish,
}

#[derive(PartialEq)]
struct ToastState {
    phase: Phase,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let phase = match action {
            ToastAction::Settle => self.phase.settled(),
            ToastAction::Dismiss => self.phase.dismissed().unwrap_or(self.phase),
            ToastAction::Finish => self.phase.finished(),
        };
        if phase == self.phase {
            self
        } else {
            Rc::new(ToastState { phase })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub severity: Severity,
    /// Emitted once the exit transition completes, so the host can clear
    /// its slot.
    pub on_closed: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let state = use_reducer(|| ToastState {
        phase: Phase::Entering,
    });

    // Slide-in nudge plus the auto-dismiss timer. Both handles live in the
    // effect cleanup, so unmounting (dismissal or replacement) cancels them.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let settle = {
                    let state = state.clone();
                    Timeout::new(ENTER_MS, move || state.dispatch(ToastAction::Settle))
                };
                let auto_dismiss =
                    Timeout::new(VISIBLE_MS, move || state.dispatch(ToastAction::Dismiss));
                move || {
                    drop(settle);
                    drop(auto_dismiss);
                }
            },
            (),
        );
    }

    // Drive the tail of the lifecycle off phase changes: schedule removal
    // when leaving starts, tell the host once removal is done.
    {
        let current_phase = state.phase;
        let state = state.clone();
        let on_closed = props.on_closed.clone();
        use_effect_with_deps(
            move |phase| {
                let mut removal = None;
                match phase {
                    Phase::Leaving => {
                        removal = Some(Timeout::new(EXIT_MS, move || {
                            state.dispatch(ToastAction::Finish)
                        }));
                    }
                    Phase::Removed => on_closed.emit(()),
                    Phase::Entering | Phase::Visible => {}
                }
                move || drop(removal)
            },
            current_phase,
        );
    }

    if state.phase == Phase::Removed {
        return html! {};
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ToastAction::Dismiss))
    };

    let style = if state.phase.is_offscreen() {
        "transform: translateX(110%);"
    } else {
        "transform: translateX(0);"
    };

    html! {
        <div
            class={classes!("notification", props.severity.css_class())}
            style={style}
            role="status"
        >
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        max-width: 400px;
                        padding: 15px 20px;
                        border-radius: 10px;
                        box-shadow: 0 4px 15px rgba(0, 0, 0, 0.1);
                        z-index: 10000;
                        transition: transform 0.3s ease;
                    }
                    .notification-success {
                        background: #d4edda;
                        color: #155724;
                        border: 1px solid #c3e6cb;
                    }
                    .notification-error {
                        background: #f8d7da;
                        color: #721c24;
                        border: 1px solid #f5c6cb;
                    }
                    .notification-info {
                        background: #d1ecf1;
                        color: #0c5460;
                        border: 1px solid #bee5eb;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 15px;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        font-size: 20px;
                        cursor: pointer;
                        color: inherit;
                        padding: 0;
                    }
                "#}
            </style>
            <div class="notification-content">
                <span class="notification-message">{ &props.message }</span>
                <button class="notification-close" onclick={on_close} aria-label="Dismiss">
                    { "\u{00d7}" }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_runs_enter_to_removed() {
        let phase = Phase::Entering.settled();
        assert_eq!(phase, Phase::Visible);
        let phase = phase.dismissed().unwrap();
        assert_eq!(phase, Phase::Leaving);
        assert_eq!(phase.finished(), Phase::Removed);
    }

    #[test]
    fn dismiss_before_settle_skips_visible() {
        assert_eq!(Phase::Entering.dismissed(), Some(Phase::Leaving));
        // The settle timer firing afterwards must not resurrect it.
        assert_eq!(Phase::Leaving.settled(), Phase::Leaving);
    }

    #[test]
    fn dismiss_is_idempotent() {
        // Close button first, auto-dismiss timer second: the second path is
        // a no-op rather than a second exit.
        assert_eq!(Phase::Leaving.dismissed(), None);
        assert_eq!(Phase::Removed.dismissed(), None);
    }

    #[test]
    fn finish_only_applies_while_leaving() {
        assert_eq!(Phase::Entering.finished(), Phase::Entering);
        assert_eq!(Phase::Visible.finished(), Phase::Visible);
        assert_eq!(Phase::Leaving.finished(), Phase::Removed);
    }

    #[test]
    fn only_the_resting_phase_is_on_screen() {
        assert!(Phase::Entering.is_offscreen());
        assert!(!Phase::Visible.is_offscreen());
        assert!(Phase::Leaving.is_offscreen());
        assert!(Phase::Removed.is_offscreen());
    }

    #[test]
    fn second_notify_replaces_the_first() {
        let mut seq = 0;
        let mut slot = None;
        slot.replace(replace_slot(&mut seq, "first".into(), Severity::Info));
        slot.replace(replace_slot(&mut seq, "second".into(), Severity::Success));

        let live = slot.take().unwrap();
        assert_eq!(live.message, "second");
        assert_eq!(live.severity, Severity::Success);
        assert_eq!(live.id, 2);
    }

    #[test]
    fn replacement_ids_never_collide_with_the_predecessor() {
        let mut seq = 0;
        let first = replace_slot(&mut seq, "a".into(), Severity::Error);
        let second = replace_slot(&mut seq, "a".into(), Severity::Error);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn severity_maps_to_distinct_classes() {
        let mut classes = vec![
            Severity::Success.css_class(),
            Severity::Error.css_class(),
            Severity::Info.css_class(),
        ];
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 3);
    }
}
