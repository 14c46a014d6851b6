mod logging;
mod view;

pub use crate::logging::logger_builder;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use sigi::domain::config::FormConfig;
use sigi::domain::member::MemberDraft;
use sigi::features::member_form::{
    MemberEditPage, MemberFormError, MemoryDocument, PageEvent, member_edit_form,
};
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    form: FormConfig,
    member: MemberDraft,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self {
            title: "SiGI - Editar membro".to_owned(),
            width: 900.0,
            height: 760.0,
            form: FormConfig::default(),
            member: MemberDraft::default(),
        }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    /// The member record shown when the window opens.
    #[must_use]
    pub fn with_member(mut self, member: MemberDraft) -> Self {
        self.member = member;
        self
    }

    /// Builds and mounts the member page without opening a window.
    ///
    /// # Errors
    /// Fails when the configured bindings or masks do not fit the page markup.
    pub fn open_page(&self) -> Result<MemberEditPage<MemoryDocument>, MemberFormError> {
        let doc = member_edit_form(&self.form, &self.member)?;
        let mut page = MemberEditPage::mount(doc, &self.form)?;
        page.dispatch(PageEvent::DomContentLoaded);
        Ok(page)
    }

    fn custom_head(&self) -> String {
        format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0"><style>.{} {{ display: none !important; }}</style>"#,
            self.form.bindings.save_hidden_class
        )
    }

    /// The entry point for launching the app
    ///
    /// # Errors
    /// The page is mounted before the window opens; see [`DesktopApp::open_page`].
    pub fn launch(self) -> Result<(), MemberFormError> {
        let page = self.open_page()?;
        info!(title = %self.title, "Launching desktop shell");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(self.custom_head());

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(page.clone()))
            .launch(view::App);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigi::domain::controls::EditMode;
    use sigi::features::member_form::FormHost;

    #[test]
    fn opened_page_has_run_its_load_listener() {
        let app = DesktopApp::new().with_member(MemberDraft {
            marital_status: Some("Married".into()),
            ..MemberDraft::default()
        });

        let page = app.open_page().expect("page");
        assert!(page.controller().spouse_visible(page.host()));
        assert_eq!(page.controller().mode(), EditMode::Locked);
    }

    #[test]
    fn bad_mask_fails_before_launch() {
        let mut form = FormConfig::default();
        form.masks[1].pattern = "---".into();

        let err = DesktopApp::new().with_form(form).open_page().expect_err("literal-only mask");
        assert!(matches!(err, MemberFormError::Mask { .. }));
        assert!(err.to_string().contains("tax_id mask"));
    }

    #[test]
    fn head_hides_the_configured_class() {
        let mut form = FormConfig::default();
        form.bindings.save_hidden_class = "oculto".into();

        let head = DesktopApp::new().with_form(form).custom_head();
        assert!(head.contains(".oculto { display: none !important; }"));
    }

    #[test]
    fn stored_member_shows_formatted_values() {
        let app = DesktopApp::new().with_member(MemberDraft {
            tax_id: Some("12345678901".into()),
            ..MemberDraft::default()
        });

        let page = app.open_page().expect("page");
        let cpf = page.find("cpf").expect("tax id");
        assert_eq!(page.host().value(cpf), "123.456.789-01");
    }
}
