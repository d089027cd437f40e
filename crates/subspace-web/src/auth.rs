//! Auth collaborator adapter
//!
//! Exposes the current user as a reactive signal and a sign-out capability.
//! The navbar reads the user and invokes `sign_out`; it never awaits or
//! inspects the outcome.

use leptos::prelude::*;
use subspace_core::SessionUser;

/// Session state shared through context
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: RwSignal<Option<SessionUser>>,
    on_sign_out: Option<Callback<()>>,
}

impl AuthContext {
    pub fn new(initial_user: Option<SessionUser>) -> Self {
        Self {
            user: RwSignal::new(initial_user),
            on_sign_out: None,
        }
    }

    /// Run `hook` after the local session is cleared (e.g. to revoke a token)
    pub fn with_sign_out_hook(mut self, hook: Callback<()>) -> Self {
        self.on_sign_out = Some(hook);
        self
    }

    /// Current user (tracked)
    pub fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn user_untracked(&self) -> Option<SessionUser> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn sign_in(&self, user: SessionUser) {
        leptos::logging::log!("Signed in as {}", user.display_name());
        self.user.set(Some(user));
    }

    /// Fire-and-forget sign-out
    pub fn sign_out(&self) {
        leptos::logging::log!("Sign-out requested");
        self.user.set(None);
        if let Some(hook) = self.on_sign_out {
            hook.run(());
        }
    }
}

/// Provides [`AuthContext`] to its children
#[component]
pub fn AuthProvider(
    /// Session to start with (anonymous when omitted)
    #[prop(optional)]
    initial_user: Option<SessionUser>,
    /// Extra work to run on sign-out
    #[prop(optional)]
    on_sign_out: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let mut auth = AuthContext::new(initial_user);
    if let Some(hook) = on_sign_out {
        auth = auth.with_sign_out_hook(hook);
    }
    provide_context(auth);

    children()
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
