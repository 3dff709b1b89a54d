//! Application screens
//!
//! Every data-entry screen is a [`ScreenForm`]: a list of field specs, a
//! default error-clearing policy and a success action, driven by one
//! [`FormRunner`]. Two success actions exist:
//!
//! - [`SessionAction`] writes a session marker, waits out a simulated round
//!   trip and replaces the stack with the main section.
//! - [`NoticeAction`] waits out a simulated round trip and shows the
//!   collected value as a transient notice.
//!
//! [`EntryScreen`] decides the startup route from the stored session and
//! [`HomeShell`] is the tabbed main section.

use std::sync::Arc;
use std::time::Duration;

use app_core::{AuthError, SessionService};
use app_state::{
    ActionError, ActionOutcome, FieldSpec, Form, FormError, FormPolicy, FormRunner, LeadingIcon,
    SubmitAction, SubmitOutcome, SubmitPayload,
};
use async_trait::async_trait;

use crate::components::{Button, ButtonVariant, FormView, SharedToastQueue, TabBar, Toast};
use crate::navigation::{NavigationTab, Navigator, Route};

/// Simulated round trip before a session screen navigates
pub const DEFAULT_SESSION_DELAY: Duration = Duration::from_millis(1500);
/// Simulated round trip before an inert screen shows its notice
pub const DEFAULT_NOTICE_DELAY: Duration = Duration::from_millis(2000);
/// How long the entry screen shows its loading state before resuming a session
pub const DEFAULT_ENTRY_DELAY: Duration = Duration::from_millis(3000);

// =============================================================================
// Screen Context
// =============================================================================

/// Collaborators shared by every screen
#[derive(Clone)]
pub struct ScreenContext {
    /// Session marker service
    pub sessions: SessionService,
    /// Navigation collaborator
    pub navigator: Arc<dyn Navigator>,
    /// Transient notices
    pub notices: SharedToastQueue,
    /// Delay used by session-establishing screens
    pub session_delay: Duration,
    /// Delay used by inert screens
    pub notice_delay: Duration,
    /// Loading time before a stored session enters the main section
    pub entry_delay: Duration,
    /// Policy applied to every form instead of the screen default
    pub policy_override: Option<FormPolicy>,
}

impl std::fmt::Debug for ScreenContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenContext")
            .field("session_delay", &self.session_delay)
            .field("notice_delay", &self.notice_delay)
            .field("entry_delay", &self.entry_delay)
            .field("policy_override", &self.policy_override)
            .finish_non_exhaustive()
    }
}

impl ScreenContext {
    /// Create a context with the default delays
    pub fn new(
        sessions: SessionService,
        navigator: Arc<dyn Navigator>,
        notices: SharedToastQueue,
    ) -> Self {
        Self {
            sessions,
            navigator,
            notices,
            session_delay: DEFAULT_SESSION_DELAY,
            notice_delay: DEFAULT_NOTICE_DELAY,
            entry_delay: DEFAULT_ENTRY_DELAY,
            policy_override: None,
        }
    }

    /// Set both simulated delays
    pub fn with_delays(mut self, session: Duration, notice: Duration) -> Self {
        self.session_delay = session;
        self.notice_delay = notice;
        self
    }

    /// Set the entry screen's loading time
    pub fn with_entry_delay(mut self, delay: Duration) -> Self {
        self.entry_delay = delay;
        self
    }

    /// Apply one policy to every form
    pub fn with_policy_override(mut self, policy: Option<FormPolicy>) -> Self {
        self.policy_override = policy;
        self
    }

    fn notify(&self, toast: Toast) {
        self.notices.lock().push(toast);
    }
}

// =============================================================================
// Success Actions
// =============================================================================

/// Writes a session marker, then enters the main section after a delay
pub struct SessionAction {
    sessions: SessionService,
    navigator: Arc<dyn Navigator>,
    delay: Duration,
}

impl SessionAction {
    /// Create the action
    pub fn new(sessions: SessionService, navigator: Arc<dyn Navigator>, delay: Duration) -> Self {
        Self {
            sessions,
            navigator,
            delay,
        }
    }
}

#[async_trait]
impl SubmitAction for SessionAction {
    async fn perform(&self, payload: SubmitPayload) -> Result<ActionOutcome, ActionError> {
        let username = payload.get("username").unwrap_or_default();
        self.sessions
            .establish(username)
            .await
            .map_err(|e| ActionError::Failed(e.to_string()))?;

        tokio::time::sleep(self.delay).await;
        self.navigator.replace(Route::Main);
        Ok(ActionOutcome::Completed)
    }
}

/// Shows the submitted values as a notice after a delay
pub struct NoticeAction {
    notices: SharedToastQueue,
    heading: String,
    delay: Duration,
}

impl NoticeAction {
    /// Create the action; the notice reads `"{heading}: {values}"`
    pub fn new(notices: SharedToastQueue, heading: impl Into<String>, delay: Duration) -> Self {
        Self {
            notices,
            heading: heading.into(),
            delay,
        }
    }
}

#[async_trait]
impl SubmitAction for NoticeAction {
    async fn perform(&self, payload: SubmitPayload) -> Result<ActionOutcome, ActionError> {
        tokio::time::sleep(self.delay).await;

        let values: Vec<&str> = payload.iter().map(|(_, value)| value).collect();
        let message = format!("{}: {}", self.heading, values.join(", "));
        self.notices.lock().push(Toast::info(message.clone()));
        Ok(ActionOutcome::Notice(message))
    }
}

// =============================================================================
// Form Screens
// =============================================================================

/// Third-party sign-in offered under the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignInProvider {
    /// Google account
    Google,
}

impl SignInProvider {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            SignInProvider::Google => "Google",
        }
    }

    /// Handler id reported when the button is pressed
    pub fn handler(&self) -> &'static str {
        match self {
            SignInProvider::Google => "form:continue-with-google",
        }
    }
}

/// The data-entry screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenForm {
    /// Sign in with username and password
    Login,
    /// Create an account
    Register,
    /// Request a password reset by email
    ForgotPassword,
}

impl ScreenForm {
    /// Route showing this screen
    pub fn route(&self) -> Route {
        match self {
            ScreenForm::Login => Route::Login,
            ScreenForm::Register => Route::Register,
            ScreenForm::ForgotPassword => Route::ForgotPassword,
        }
    }

    /// Screen for a route, if the route shows a form
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::Login => Some(ScreenForm::Login),
            Route::Register => Some(ScreenForm::Register),
            Route::ForgotPassword => Some(ScreenForm::ForgotPassword),
            _ => None,
        }
    }

    /// Submit button label
    pub fn submit_label(&self) -> &'static str {
        match self {
            ScreenForm::Login => "Sign in",
            ScreenForm::Register => "Create account",
            ScreenForm::ForgotPassword => "Send reset link",
        }
    }

    /// Field declarations, in display order
    pub fn fields(&self) -> Vec<FieldSpec> {
        match self {
            ScreenForm::Login => vec![
                FieldSpec::new("username", "Username").required(),
                FieldSpec::password("password", "Password")
                    .required()
                    .with_max_length(100),
            ],
            ScreenForm::Register => vec![
                FieldSpec::new("username", "Username")
                    .required()
                    .with_max_length(30),
                FieldSpec::password("password", "Password")
                    .required()
                    .with_max_length(100),
                FieldSpec::password("confirm_password", "Confirm password")
                    .required()
                    .with_max_length(100)
                    .with_icon(LeadingIcon::Key),
            ],
            ScreenForm::ForgotPassword => vec![FieldSpec::new("email", "Email")
                .with_placeholder("Email address")
                .required()
                .with_max_length(254)
                .with_icon(LeadingIcon::Mail)],
        }
    }

    /// Error-clearing policy used unless overridden
    pub fn default_policy(&self) -> FormPolicy {
        match self {
            ScreenForm::Login => FormPolicy::default(),
            ScreenForm::Register => FormPolicy::default().with_clear_on_empty(false),
            ScreenForm::ForgotPassword => FormPolicy::default().with_clear_on_focus(false),
        }
    }

    /// Secondary links shown under the submit button
    pub fn links(&self) -> Vec<(&'static str, Route)> {
        match self {
            ScreenForm::Login => vec![
                ("Forgot password?", Route::ForgotPassword),
                ("Create an account", Route::Register),
            ],
            ScreenForm::Register => vec![("Already have an account? Sign in", Route::Login)],
            ScreenForm::ForgotPassword => vec![("Back to sign in", Route::Login)],
        }
    }

    /// Third-party sign-in buttons shown under the divider
    pub fn sign_in_providers(&self) -> Vec<SignInProvider> {
        match self {
            ScreenForm::Login => vec![SignInProvider::Google],
            ScreenForm::Register | ScreenForm::ForgotPassword => Vec::new(),
        }
    }

    /// Success action for this screen
    pub fn action(&self, ctx: &ScreenContext) -> Arc<dyn SubmitAction> {
        match self {
            ScreenForm::Login | ScreenForm::Register => Arc::new(SessionAction::new(
                ctx.sessions.clone(),
                Arc::clone(&ctx.navigator),
                ctx.session_delay,
            )),
            ScreenForm::ForgotPassword => Arc::new(NoticeAction::new(
                Arc::clone(&ctx.notices),
                "Reset link requested for",
                ctx.notice_delay,
            )),
        }
    }

    /// Mount the screen with fresh fields
    pub fn mount(&self, ctx: &ScreenContext) -> Result<FormScreen, FormError> {
        let policy = ctx.policy_override.unwrap_or_else(|| self.default_policy());
        let form = Form::new(self.fields(), policy)?;
        tracing::debug!(screen = self.route().name(), "Mounting form screen");

        Ok(FormScreen {
            kind: *self,
            runner: FormRunner::new(form, self.action(ctx)),
            navigator: Arc::clone(&ctx.navigator),
            notices: Arc::clone(&ctx.notices),
        })
    }
}

/// A mounted form screen
///
/// Dropping the screen aborts any submission still in flight.
pub struct FormScreen {
    kind: ScreenForm,
    runner: FormRunner,
    navigator: Arc<dyn Navigator>,
    notices: SharedToastQueue,
}

impl std::fmt::Debug for FormScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormScreen")
            .field("kind", &self.kind)
            .field("runner", &self.runner)
            .finish_non_exhaustive()
    }
}

impl FormScreen {
    /// Which screen this is
    pub fn kind(&self) -> ScreenForm {
        self.kind
    }

    /// The form runner
    pub fn runner(&self) -> &FormRunner {
        &self.runner
    }

    /// Validate and start the success action when valid
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        self.runner.submit()
    }

    /// Wait for the in-flight action, if any
    pub async fn settle(&mut self) -> Option<Result<ActionOutcome, ActionError>> {
        self.runner.settle().await
    }

    /// Render the current state
    pub fn view(&self) -> FormView {
        let form = self.runner.form();
        let form = form.lock();
        let view = self.kind.links().into_iter().fold(
            FormView::new(self.kind.route().title(), self.kind.submit_label(), &form),
            |view, (label, route)| view.with_link(label, route.name()),
        );
        self.kind
            .sign_in_providers()
            .into_iter()
            .fold(view, |view, provider| {
                view.with_alternative(provider.label(), provider.handler())
            })
    }

    /// Follow one of the screen's links
    ///
    /// Returns to the target when it is directly below on the stack,
    /// otherwise pushes it.
    pub fn follow_link(&self, route: Route) {
        if self.navigator.previous_route() == Some(route) {
            self.navigator.back();
        } else {
            self.navigator.navigate(route);
        }
    }

    /// Press a third-party sign-in button
    ///
    /// No provider is wired up yet, so this only shows a notice. Returns
    /// false when the screen does not offer `provider`.
    pub fn continue_with(&self, provider: SignInProvider) -> bool {
        if !self.kind.sign_in_providers().contains(&provider) {
            return false;
        }
        tracing::debug!(provider = provider.label(), "Alternative sign-in pressed");
        self.notices.lock().push(Toast::info(format!(
            "Login with {} coming soon...",
            provider.label()
        )));
        true
    }
}

// =============================================================================
// Entry Screen
// =============================================================================

/// Startup screen that routes on the stored session
pub struct EntryScreen;

impl EntryScreen {
    /// Check for a stored session and enter the main section if one exists
    ///
    /// With a session the screen stays in its loading state for the
    /// context's entry delay before replacing the stack. Returns the route
    /// the app is showing afterwards.
    pub async fn mount(ctx: &ScreenContext) -> Result<Route, AuthError> {
        if ctx.sessions.has_session().await? {
            tracing::info!(
                delay_ms = ctx.entry_delay.as_millis() as u64,
                "Stored session found"
            );
            tokio::time::sleep(ctx.entry_delay).await;
            ctx.navigator.replace(Route::Main);
            Ok(Route::Main)
        } else {
            tracing::info!("No stored session");
            Ok(Route::Welcome)
        }
    }

    /// Buttons offered on the welcome screen
    pub fn actions() -> Vec<Button> {
        vec![
            Button::new("Sign in").on_press(Route::Login.name()),
            Button::new("Create account")
                .with_variant(ButtonVariant::Outline)
                .on_press(Route::Register.name()),
        ]
    }
}

// =============================================================================
// Home Shell
// =============================================================================

/// Tabbed main section
#[derive(Debug)]
pub struct HomeShell {
    ctx: ScreenContext,
    active_tab: NavigationTab,
}

impl HomeShell {
    /// Mount the shell on the Home tab
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            active_tab: NavigationTab::Home,
        }
    }

    /// Currently shown tab
    pub fn active_tab(&self) -> NavigationTab {
        self.active_tab
    }

    /// Select a tab
    ///
    /// The centre cart button has no screen behind it yet: pressing it
    /// shows a notice and keeps the current tab.
    pub fn select_tab(&mut self, tab: NavigationTab) -> bool {
        if tab.is_center_action() {
            self.ctx
                .notify(Toast::info(format!("{} is coming soon", tab.label())));
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Tab bar for the current selection
    pub fn tab_bar(&self) -> TabBar {
        TabBar::new().set_active(self.active_tab)
    }

    /// Sign out and return to the welcome screen
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.ctx.sessions.end().await?;
        self.ctx.navigator.replace(Route::Welcome);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ToastQueue;
    use crate::navigation::{MockNavigator, NavigationHandle};
    use app_state::{FailureReason, VisualState};
    use mockall::predicate::eq;
    use storage::MemoryStore;

    fn context(navigator: Arc<dyn Navigator>) -> ScreenContext {
        ScreenContext::new(
            SessionService::new(Arc::new(MemoryStore::new())),
            navigator,
            ToastQueue::shared(),
        )
    }

    fn fill(screen: &FormScreen, values: &[(&str, &str)]) {
        for (name, value) in values {
            screen.runner().change_text(name, *value).unwrap();
        }
    }

    #[test]
    fn test_field_names_unique_per_screen() {
        let ctx = context(Arc::new(MockNavigator::new()));
        for screen in [ScreenForm::Login, ScreenForm::Register, ScreenForm::ForgotPassword] {
            assert!(screen.mount(&ctx).is_ok());
            assert_eq!(ScreenForm::for_route(screen.route()), Some(screen));
        }
        assert_eq!(ScreenForm::for_route(Route::Main), None);
    }

    #[test]
    fn test_register_has_confirm_field() {
        let names: Vec<_> = ScreenForm::Register
            .fields()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["username", "password", "confirm_password"]);
    }

    #[test]
    fn test_policy_override_applies() {
        let ctx = context(Arc::new(MockNavigator::new()))
            .with_policy_override(Some(FormPolicy::sticky()));
        let screen = ScreenForm::Login.mount(&ctx).unwrap();
        assert_eq!(screen.runner().form().lock().policy(), FormPolicy::sticky());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_navigates_after_delay() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .with(eq(Route::Main))
            .times(1)
            .return_const(());
        let ctx = context(Arc::new(navigator));
        let mut screen = ScreenForm::Login.mount(&ctx).unwrap();
        fill(&screen, &[("username", "alice"), ("password", "secret")]);

        assert!(screen.submit().unwrap().is_valid());
        assert!(screen.view().submit.loading);

        let result = screen.settle().await.unwrap();
        assert_eq!(result, Ok(ActionOutcome::Completed));
        assert!(!screen.view().submit.loading);

        let marker = ctx.sessions.current().await.unwrap().unwrap();
        assert_eq!(marker.username.as_deref(), Some("alice"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_username_still_enters_main() {
        let handle = NavigationHandle::new();
        let ctx = context(Arc::new(handle.clone()));
        handle.navigate(Route::Login);
        let mut screen = ScreenForm::Login.mount(&ctx).unwrap();
        fill(&screen, &[("username", "   "), ("password", "secret")]);

        assert!(screen.submit().unwrap().is_valid());
        assert_eq!(screen.settle().await.unwrap(), Ok(ActionOutcome::Completed));
        assert_eq!(handle.current_route(), Route::Main);
        assert!(ctx.sessions.has_session().await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_before_navigating() {
        let handle = NavigationHandle::new();
        let ctx = context(Arc::new(handle.clone()));
        handle.navigate(Route::Login);
        let mut screen = ScreenForm::Login.mount(&ctx).unwrap();
        fill(&screen, &[("username", "alice"), ("password", "secret")]);

        screen.submit().unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(handle.current_route(), Route::Login);
        assert!(screen.runner().is_submitting());

        screen.settle().await.unwrap().unwrap();
        assert_eq!(handle.current_route(), Route::Main);
        assert!(!handle.can_go_back());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_login_touches_no_collaborator() {
        // No expectations: any navigator call panics
        let ctx = context(Arc::new(MockNavigator::new()));
        let mut screen = ScreenForm::Login.mount(&ctx).unwrap();
        fill(&screen, &[("password", "abc")]);

        let SubmitOutcome::Invalid(result) = screen.submit().unwrap() else {
            panic!("expected invalid outcome");
        };
        assert_eq!(result.failure_for("username"), Some(FailureReason::Missing));
        assert!(screen.settle().await.is_none());
        assert!(!ctx.sessions.has_session().await.unwrap());

        let view = screen.view();
        assert_eq!(view.field("username").unwrap().visual_state, VisualState::Error);
        assert_eq!(view.field("password").unwrap().visual_state, VisualState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forgot_password_shows_notice() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let mut screen = ScreenForm::ForgotPassword.mount(&ctx).unwrap();
        fill(&screen, &[("email", "alice@example.com")]);

        screen.submit().unwrap();
        let outcome = screen.settle().await.unwrap().unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::Notice("Reset link requested for: alice@example.com".to_string())
        );
        assert!(!screen.runner().is_submitting());

        let notices = ctx.notices.lock();
        assert_eq!(
            notices.latest().unwrap().message,
            "Reset link requested for: alice@example.com"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_navigation() {
        let handle = NavigationHandle::new();
        let ctx = context(Arc::new(handle.clone()));
        let mut screen = ScreenForm::Register.mount(&ctx).unwrap();
        fill(
            &screen,
            &[
                ("username", "bob"),
                ("password", "hunter22"),
                ("confirm_password", "hunter22"),
            ],
        );

        screen.submit().unwrap();
        tokio::task::yield_now().await;
        drop(screen);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(handle.current_route(), Route::Welcome);
    }

    #[test]
    fn test_view_includes_links() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let screen = ScreenForm::Login.mount(&ctx).unwrap();
        let view = screen.view();

        assert_eq!(view.title, "Sign in");
        assert_eq!(view.links.len(), 2);
        assert_eq!(view.links[0].on_press.as_deref(), Some("forgot-password"));
        assert_eq!(view.alternatives.len(), 1);
        assert_eq!(
            view.alternatives[0].on_press.as_deref(),
            Some(SignInProvider::Google.handler())
        );

        let register = ScreenForm::Register.mount(&ctx).unwrap().view();
        assert!(register.alternatives.is_empty());
        assert!(register.divider.is_none());
    }

    #[test]
    fn test_continue_with_google_shows_notice() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let login = ScreenForm::Login.mount(&ctx).unwrap();
        assert!(login.continue_with(SignInProvider::Google));
        assert_eq!(
            ctx.notices.lock().latest().unwrap().message,
            "Login with Google coming soon..."
        );

        let register = ScreenForm::Register.mount(&ctx).unwrap();
        assert!(!register.continue_with(SignInProvider::Google));
        assert_eq!(ctx.notices.lock().len(), 1);
    }

    #[test]
    fn test_follow_link_returns_when_target_is_below() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_previous_route()
            .return_const(Some(Route::Login));
        navigator.expect_back().times(1).return_const(true);

        let ctx = context(Arc::new(navigator));
        let forgot = ScreenForm::ForgotPassword.mount(&ctx).unwrap();
        forgot.follow_link(Route::Login);
    }

    #[test]
    fn test_follow_link_pushes_when_target_not_below() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_previous_route()
            .return_const(Some(Route::Welcome));
        navigator
            .expect_navigate()
            .with(eq(Route::ForgotPassword))
            .times(1)
            .return_const(());

        let ctx = context(Arc::new(navigator));
        let login = ScreenForm::Login.mount(&ctx).unwrap();
        login.follow_link(Route::ForgotPassword);
    }

    #[test]
    fn test_sign_in_link_from_register_opened_on_welcome() {
        let handle = NavigationHandle::new();
        let ctx = context(Arc::new(handle.clone()));
        handle.navigate(Route::Register);

        let register = ScreenForm::Register.mount(&ctx).unwrap();
        register.follow_link(Route::Login);
        assert_eq!(handle.current_route(), Route::Login);
        assert_eq!(handle.previous_route(), Some(Route::Register));
    }

    #[test]
    fn test_sign_in_link_from_register_opened_on_login() {
        let handle = NavigationHandle::new();
        let ctx = context(Arc::new(handle.clone()));
        handle.navigate(Route::Login);
        handle.navigate(Route::Register);

        let register = ScreenForm::Register.mount(&ctx).unwrap();
        register.follow_link(Route::Login);
        assert_eq!(handle.current_route(), Route::Login);
        assert_eq!(handle.previous_route(), Some(Route::Welcome));
    }

    #[tokio::test]
    async fn test_entry_without_session_stays() {
        let ctx = context(Arc::new(MockNavigator::new()));
        assert_eq!(EntryScreen::mount(&ctx).await.unwrap(), Route::Welcome);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_with_session_enters_main_after_loading() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .with(eq(Route::Main))
            .times(1)
            .return_const(());
        let ctx = context(Arc::new(navigator));
        ctx.sessions.establish("alice").await.unwrap();

        let started = tokio::time::Instant::now();
        assert_eq!(EntryScreen::mount(&ctx).await.unwrap(), Route::Main);
        assert!(started.elapsed() >= DEFAULT_ENTRY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_without_session_does_not_wait() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let started = tokio::time::Instant::now();
        EntryScreen::mount(&ctx).await.unwrap();
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_cart_button_keeps_selection() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let mut shell = HomeShell::new(ctx.clone());

        assert!(shell.select_tab(NavigationTab::Wishlist));
        assert!(!shell.select_tab(NavigationTab::Cart));
        assert_eq!(shell.active_tab(), NavigationTab::Wishlist);
        assert_eq!(shell.tab_bar().active_tab(), Some(NavigationTab::Wishlist));

        let notices = ctx.notices.lock();
        assert_eq!(notices.latest().unwrap().message, "Cart is coming soon");
    }

    #[test]
    fn test_every_other_tab_is_selectable() {
        let ctx = context(Arc::new(MockNavigator::new()));
        let mut shell = HomeShell::new(ctx.clone());

        for tab in [NavigationTab::Search, NavigationTab::Setting, NavigationTab::Home] {
            assert!(shell.select_tab(tab));
            assert_eq!(shell.active_tab(), tab);
        }
        assert!(ctx.notices.lock().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_replace()
            .with(eq(Route::Welcome))
            .times(1)
            .return_const(());
        let ctx = context(Arc::new(navigator));
        ctx.sessions.establish("alice").await.unwrap();

        HomeShell::new(ctx.clone()).logout().await.unwrap();
        assert!(!ctx.sessions.has_session().await.unwrap());
    }
}
