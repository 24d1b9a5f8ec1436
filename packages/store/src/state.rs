//! # Application state container
//!
//! [`AppState`] is the single source of truth for a browser session. The UI
//! holds one instance inside a context `Signal` and every page mutates it only
//! through the transition methods below, so the rules live here rather than in
//! component bodies.
//!
//! ## Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`login`](AppState::login) / [`signup`](AppState::signup) | Set the user and go to the upload page. |
//! | [`logout`](AppState::logout) | Restore [`AppState::initial`] wholesale (the session counter advances). |
//! | [`update_profile`](AppState::update_profile) | Replace the user and close the profile editor. |
//! | [`navigate`](AppState::navigate) | Move between upload, settings, and outline. Never clears data. |
//! | [`add_files`](AppState::add_files) | Append uploaded documents. |
//! | [`begin_generation`](AppState::begin_generation) / [`finish_generation`](AppState::finish_generation) | Bracket one asynchronous generation run. |
//!
//! ## Rendering
//!
//! [`AppState::view`] resolves which screen to draw, in strict precedence:
//! no user → auth form; profile editor open → profile editor; otherwise the
//! current page.
//!
//! ## Sessions
//!
//! Each login-to-logout span has a private session number. A
//! [`GenerationTicket`] remembers the session it was issued in, and
//! [`finish_generation`](AppState::finish_generation) drops results from an
//! earlier session so nothing generated for one user lands in the next.

use crate::error::{GenerationError, MissingField, ValidationError};
use crate::generation::GenerationRequest;
use crate::models::{SlideCard, Theme, UploadedFile, User};
use crate::settings::PresentationSettings;

/// Step of the main flow, addressed by an integer cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Upload = 1,
    Settings = 2,
    Outline = 3,
}

impl Page {
    /// Resolve a page cursor. Unknown values fall back to [`Page::Upload`].
    pub fn from_cursor(cursor: i64) -> Page {
        match cursor {
            2 => Page::Settings,
            3 => Page::Outline,
            _ => Page::Upload,
        }
    }

    pub fn cursor(self) -> i64 {
        self as i64
    }
}

/// Which form the signed-out screen shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPage {
    #[default]
    Login,
    Signup,
}

/// The screen to render for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    ProfileEdit,
    Upload,
    Settings,
    Outline,
}

/// Proof that a generation run was started, carrying the validated request.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationTicket {
    pub request: GenerationRequest,
    session: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub user: Option<User>,
    pub auth_page: AuthPage,
    pub current_page: Page,
    pub show_profile_edit: bool,
    pub files: Vec<UploadedFile>,
    pub settings: PresentationSettings,
    pub cards: Vec<SlideCard>,
    pub generating: bool,
    session: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}

impl AppState {
    /// The state of a fresh, signed-out session.
    pub fn initial() -> Self {
        Self {
            user: None,
            auth_page: AuthPage::Login,
            current_page: Page::Upload,
            show_profile_edit: false,
            files: Vec::new(),
            settings: PresentationSettings::default(),
            cards: Vec::new(),
            generating: false,
            session: 0,
        }
    }

    /// Restore [`AppState::initial`] and start a new session.
    pub fn reset(&mut self) {
        let next = self.session.wrapping_add(1);
        *self = Self::initial();
        self.session = next;
    }

    pub fn login(&mut self, user: User) {
        tracing::info!(email = %user.email, "signed in");
        self.sign_in(user);
    }

    pub fn signup(&mut self, user: User) {
        tracing::info!(email = %user.email, "account created");
        self.sign_in(user);
    }

    fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.current_page = Page::Upload;
    }

    pub fn logout(&mut self) {
        tracing::info!("signed out");
        self.reset();
    }

    pub fn update_profile(&mut self, user: User) {
        self.user = Some(user);
        self.show_profile_edit = false;
    }

    pub fn edit_profile(&mut self) {
        self.show_profile_edit = true;
    }

    pub fn close_profile_edit(&mut self) {
        self.show_profile_edit = false;
    }

    pub fn show_login(&mut self) {
        self.auth_page = AuthPage::Login;
    }

    pub fn show_signup(&mut self) {
        self.auth_page = AuthPage::Signup;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Append newly selected files after the existing ones.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(files);
    }

    /// The upload page's "next" control is enabled only with at least one file.
    pub fn can_leave_upload(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.settings.title = title.into();
    }

    pub fn set_theme(&mut self, theme: Option<Theme>) {
        self.settings.theme = theme;
    }

    /// Whether the settings page's generate control is enabled.
    pub fn can_generate(&self) -> bool {
        self.settings.is_complete() && !self.generating
    }

    /// Check every precondition of a generation run, reporting all gaps at once.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        let mut missing = Vec::new();
        let title = self.settings.title.trim();
        if title.is_empty() {
            missing.push(MissingField::Title);
        }
        if self.settings.theme.is_none() {
            missing.push(MissingField::Theme);
        }
        if self.files.is_empty() {
            missing.push(MissingField::Files);
        }
        match self.settings.theme {
            Some(theme) if missing.is_empty() => Ok(GenerationRequest {
                title: title.to_string(),
                theme,
                files: self.files.clone(),
                slide_count: self.settings.slide_count(),
            }),
            _ => Err(ValidationError { missing }),
        }
    }

    /// Enter the generating state. Fails without touching state when a run is
    /// already outstanding or the inputs are incomplete.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, GenerationError> {
        if self.generating {
            return Err(GenerationError::Busy);
        }
        let request = self.validate()?;
        self.generating = true;
        tracing::info!(
            title = %request.title,
            theme = %request.theme,
            slides = request.slide_count,
            files = request.files.len(),
            "generation started"
        );
        Ok(GenerationTicket {
            request,
            session: self.session,
        })
    }

    /// Leave the generating state. On success store the cards and show the
    /// outline; on failure keep everything else as it was and hand the error
    /// back for display. Results from an earlier session are discarded.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<SlideCard>, GenerationError>,
    ) -> Result<(), GenerationError> {
        if ticket.session != self.session {
            tracing::debug!("discarding generation result from a previous session");
            return Ok(());
        }
        self.generating = false;
        match result {
            Ok(cards) => {
                tracing::info!(cards = cards.len(), "generation finished");
                self.cards = cards;
                self.current_page = Page::Outline;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("generation failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn view(&self) -> View {
        if self.user.is_none() {
            return match self.auth_page {
                AuthPage::Login => View::Login,
                AuthPage::Signup => View::Signup,
            };
        }
        if self.show_profile_edit {
            return View::ProfileEdit;
        }
        match self.current_page {
            Page::Upload => View::Upload,
            Page::Settings => View::Settings,
            Page::Outline => View::Outline,
        }
    }
}
