use leptos::prelude::*;

/// What a button shows and whether it can be pressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: String,
}

impl ButtonState {
    pub fn ready(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            label: label.into(),
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            label: label.into(),
        }
    }
}

/// A button the handlers can lock while they work.
pub trait Control {
    fn state(&self) -> ButtonState;
    fn set_state(&self, state: ButtonState);
}

impl Control for RwSignal<ButtonState> {
    fn state(&self) -> ButtonState {
        self.get_untracked()
    }

    fn set_state(&self, state: ButtonState) {
        self.set(state);
    }
}

#[cfg(test)]
impl Control for std::cell::RefCell<ButtonState> {
    fn state(&self) -> ButtonState {
        self.borrow().clone()
    }

    fn set_state(&self, state: ButtonState) {
        *self.borrow_mut() = state;
    }
}

/// Disables a control and swaps in a busy label for as long as it lives.
///
/// On drop the control is enabled again with the label it had when the guard was taken,
/// whichever way the owning scope is left.
#[must_use = "the control is released as soon as the guard is dropped"]
pub struct BusyGuard<'a, C: Control + ?Sized> {
    control: &'a C,
    label: String,
}

impl<'a, C: Control + ?Sized> BusyGuard<'a, C> {
    pub fn engage(control: &'a C, busy_label: &str) -> Self {
        let label = control.state().label;
        control.set_state(ButtonState::busy(busy_label));
        Self { control, label }
    }
}

impl<C: Control + ?Sized> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        let label = std::mem::take(&mut self.label);
        self.control.set_state(ButtonState::ready(label));
    }
}
