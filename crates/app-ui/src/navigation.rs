//! Navigation system for Portico
//!
//! This module provides:
//! - Named route definitions
//! - A navigation stack with push, replace and back
//! - The tabs of the main section
//! - The [`Navigator`] seam screens navigate through, and a shared
//!   [`NavigationHandle`] implementing it

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Route Definitions
// =============================================================================

/// All routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Signed-out landing screen
    #[default]
    Welcome,
    /// Sign in
    Login,
    /// Create an account
    Register,
    /// Request a password reset
    ForgotPassword,
    /// Tabbed main section
    Main,
}

impl Route {
    /// Route name used when addressing navigation
    pub fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Login => "login",
            Route::Register => "register",
            Route::ForgotPassword => "forgot-password",
            Route::Main => "main",
        }
    }

    /// Get the screen title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Login => "Sign in",
            Route::Register => "Create account",
            Route::ForgotPassword => "Forgot password",
            Route::Main => "Home",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Route::Welcome),
            "login" => Ok(Route::Login),
            "register" => Ok(Route::Register),
            "forgot-password" => Ok(Route::ForgotPassword),
            "main" => Ok(Route::Main),
            _ => Err(format!("Unknown route: {}", s)),
        }
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Tabs of the main section
///
/// Cart sits in the middle of the bar as a raised action button rather
/// than a selectable tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Saved items
    Wishlist,
    /// Centre cart action
    Cart,
    /// Search tab
    Search,
    /// Settings tab
    Setting,
}

impl NavigationTab {
    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Wishlist => "heart",
            NavigationTab::Cart => "cart",
            NavigationTab::Search => "search",
            NavigationTab::Setting => "settings",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Wishlist => "Wishlist",
            NavigationTab::Cart => "Cart",
            NavigationTab::Search => "Search",
            NavigationTab::Setting => "Setting",
        }
    }

    /// Whether the tab is the raised centre button
    pub fn is_center_action(&self) -> bool {
        matches!(self, NavigationTab::Cart)
    }

    /// Get all tabs in bar order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Home,
            NavigationTab::Wishlist,
            NavigationTab::Cart,
            NavigationTab::Search,
            NavigationTab::Setting,
        ]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Stack of visited routes; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Discard the whole stack and start over at `route`
    ///
    /// The replaced screens cannot be returned to with back.
    pub fn replace(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Route that back would return to
    pub fn previous(&self) -> Option<Route> {
        self.entries
            .len()
            .checked_sub(2)
            .map(|index| self.entries[index].route)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Route stack
    pub stack: NavigationStack,
}

impl NavigationState {
    /// Create a new navigation state rooted at the welcome route
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Navigate to a route
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Replace the stack with a route
    pub fn replace(&mut self, route: Route) {
        self.stack.replace(route);
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        self.stack.pop()
    }

    /// Route below the current one
    pub fn previous_route(&self) -> Option<Route> {
        self.stack.previous()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigation operations available to screens
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Push a route
    fn navigate(&self, route: Route);
    /// Replace the stack with a route
    fn replace(&self, route: Route);
    /// Pop the current route; returns false at the root
    fn back(&self) -> bool;
    /// Whether back would pop a route
    fn can_go_back(&self) -> bool;
    /// Route back would return to, if any
    fn previous_route(&self) -> Option<Route>;
}

/// Shared, thread-safe navigation state
#[derive(Debug, Clone, Default)]
pub struct NavigationHandle {
    state: Arc<Mutex<NavigationState>>,
}

impl NavigationHandle {
    /// Create a handle rooted at the welcome route
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.state.lock().current_route()
    }
}

impl Navigator for NavigationHandle {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.name(), "Navigate");
        self.state.lock().navigate(route);
    }

    fn replace(&self, route: Route) {
        tracing::debug!(route = route.name(), "Replace");
        self.state.lock().replace(route);
    }

    fn back(&self) -> bool {
        let popped = self.state.lock().go_back();
        tracing::debug!(popped, "Back");
        popped
    }

    fn can_go_back(&self) -> bool {
        self.state.lock().can_go_back()
    }

    fn previous_route(&self) -> Option<Route> {
        self.state.lock().previous_route()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names_round_trip() {
        for route in [
            Route::Welcome,
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::Main,
        ] {
            assert_eq!(route.name().parse::<Route>(), Ok(route));
        }
        assert!("settings".parse::<Route>().is_err());
        assert!("(tabs)".parse::<Route>().is_err());
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_string(&Route::ForgotPassword).unwrap();
        assert_eq!(json, "\"forgot-password\"");
        let parsed: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Route::ForgotPassword);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Welcome);
        assert!(!stack.can_go_back());
        assert_eq!(stack.previous(), None);

        stack.push(Route::Login);
        assert!(stack.can_go_back());
        assert_eq!(stack.current(), Route::Login);
        assert_eq!(stack.previous(), Some(Route::Welcome));

        assert!(stack.pop());
        assert_eq!(stack.current(), Route::Welcome);

        // Can't pop past root
        assert!(!stack.pop());
    }

    #[test]
    fn test_stack_entries_have_unique_keys() {
        let mut stack = NavigationStack::new(Route::Welcome);
        let root_key = stack.current_entry().key.clone();
        stack.push(Route::Welcome);
        assert_ne!(stack.current_entry().key, root_key);
    }

    #[test]
    fn test_replace_clears_history() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login);
        state.navigate(Route::ForgotPassword);
        assert!(state.can_go_back());

        state.replace(Route::Main);
        assert_eq!(state.current_route(), Route::Main);
        assert!(!state.can_go_back());
        assert!(!state.go_back());
    }

    #[test]
    fn test_cart_is_centre_of_bar() {
        let tabs = NavigationTab::all();
        let centre: Vec<_> = tabs.iter().filter(|t| t.is_center_action()).collect();
        assert_eq!(centre, vec![&NavigationTab::Cart]);
        assert_eq!(tabs[tabs.len() / 2], NavigationTab::Cart);
    }

    #[test]
    fn test_handle_implements_navigator() {
        let handle = NavigationHandle::new();
        let navigator: &dyn Navigator = &handle;

        navigator.navigate(Route::Register);
        assert_eq!(handle.current_route(), Route::Register);
        assert!(navigator.can_go_back());
        assert_eq!(navigator.previous_route(), Some(Route::Welcome));

        assert!(navigator.back());
        assert_eq!(handle.current_route(), Route::Welcome);
        assert!(!navigator.back());
    }

    #[test]
    fn test_handle_clones_share_state() {
        let handle = NavigationHandle::new();
        let other = handle.clone();
        other.navigate(Route::Login);
        other.replace(Route::Main);

        assert_eq!(handle.current_route(), Route::Main);
        assert!(!handle.can_go_back());
    }

    #[test]
    fn test_navigation_state_serialization() {
        let mut state = NavigationState::new();
        state.navigate(Route::Login);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
