use crate::controller::FormUiController;
use crate::dom::FormHost;
use crate::error::MemberFormError;
use crate::masker::MaskRegistry;
use sigi_domain::config::FormConfig;
use sigi_domain::member::MemberDraft;
use tracing::{info, instrument, trace};

/// Events the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent<H> {
    /// The document finished loading.
    DomContentLoaded,
    /// A control's value was committed (selectors fire this after [`PageEvent::Input`]).
    Change { target: H },
    Click { target: H },
    /// The user typed or picked `text` in a control.
    Input { target: H, text: String },
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Handled,
    /// The save button was clicked; carries the values to persist.
    Saved(MemberDraft),
    /// No listener for this event, or the target cannot take it.
    Ignored,
}

/// The member edit page: host document, controller and masks wired together.
#[derive(Debug, Clone)]
pub struct MemberEditPage<F: FormHost> {
    host: F,
    controller: FormUiController<F::Handle>,
    masks: MaskRegistry<F::Handle>,
}

impl<F: FormHost> MemberEditPage<F> {
    /// Binds the controller to `host` and attaches the configured masks.
    ///
    /// Values already in masked fields are re-formatted.
    ///
    /// # Errors
    /// Fails when the markup lacks a contract element or a mask pattern is invalid.
    #[instrument(skip_all)]
    pub fn mount(mut host: F, config: &FormConfig) -> Result<Self, MemberFormError> {
        let controller = FormUiController::bind(&host, config)?;

        let mut masks = MaskRegistry::new();
        controller.apply_input_masks(&mut masks)?;
        masks.reformat_all(&mut host);

        info!(masks = masks.len(), "Member edit page mounted");
        Ok(Self { host, controller, masks })
    }

    pub const fn host(&self) -> &F {
        &self.host
    }

    /// Direct access to the document, bypassing the listeners.
    pub const fn host_mut(&mut self) -> &mut F {
        &mut self.host
    }

    pub fn into_host(self) -> F {
        self.host
    }

    pub const fn controller(&self) -> &FormUiController<F::Handle> {
        &self.controller
    }

    pub const fn masks(&self) -> &MaskRegistry<F::Handle> {
        &self.masks
    }

    pub fn find(&self, id: &str) -> Option<F::Handle> {
        self.host.find_by_id(id)
    }

    pub fn value(&self, el: F::Handle) -> String {
        self.host.value(el)
    }

    /// Routes one event to its listener.
    pub fn dispatch(&mut self, event: PageEvent<F::Handle>) -> PageOutcome {
        let (marital_status, enable_edit, save) = {
            let h = self.controller.handles();
            (h.marital_status, h.enable_edit, h.save)
        };

        match event {
            PageEvent::DomContentLoaded => {
                self.controller.on_page_load(&mut self.host);
                PageOutcome::Handled
            },
            PageEvent::Change { target } if target == marital_status => {
                self.controller.on_marital_status_change(&mut self.host);
                PageOutcome::Handled
            },
            PageEvent::Click { target } if target == enable_edit => {
                self.controller.on_enable_edit_click(&mut self.host);
                PageOutcome::Handled
            },
            PageEvent::Click { target }
                if target == save && self.controller.save_visible(&self.host) =>
            {
                PageOutcome::Saved(self.controller.collect_draft(&self.host))
            },
            PageEvent::Input { target, text } if self.host.locks(target).is_empty() => {
                if self.masks.format_input(&mut self.host, target, &text).is_none() {
                    self.host.set_value(target, &text);
                }
                PageOutcome::Handled
            },
            other => {
                trace!(event = ?other, "Event ignored");
                PageOutcome::Ignored
            },
        }
    }

    /// Picks `value` in a selector the way a user would: input, then change.
    pub fn choose(&mut self, target: F::Handle, value: &str) -> PageOutcome {
        match self.dispatch(PageEvent::Input { target, text: value.to_owned() }) {
            PageOutcome::Ignored => PageOutcome::Ignored,
            _ => self.dispatch(PageEvent::Change { target }),
        }
    }
}
