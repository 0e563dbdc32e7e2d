use super::*;
use crate::state::session::Role;

fn anonymous() -> Session {
    Session::default()
}

fn user() -> Session {
    Session::new("tok123", Role::User)
}

fn admin() -> Session {
    Session::new("tok123", Role::Admin)
}

// =============================================================
// Path table
// =============================================================

#[test]
fn from_path_matches_every_known_route() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), route);
    }
}

#[test]
fn from_path_ignores_trailing_slash() {
    assert_eq!(AppRoute::from_path("/profile/"), AppRoute::Profile);
    assert_eq!(AppRoute::from_path("/admin/users/"), AppRoute::AdminUsers);
    assert_eq!(AppRoute::from_path(""), AppRoute::Root);
}

#[test]
fn from_path_unknown_is_not_found() {
    assert_eq!(AppRoute::from_path("/settings"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/admin/other"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(NOT_FOUND_PATH), AppRoute::NotFound);
}

#[test]
fn admin_and_admin_users_share_a_view() {
    assert_eq!(AppRoute::Admin.target(), AppRoute::AdminUsers.target());
}

#[test]
fn root_redirects_unconditionally() {
    for session in [anonymous(), user(), admin()] {
        assert_eq!(resolve(AppRoute::Root, &session), Resolution::Redirect(LOGIN_PATH));
    }
}

// =============================================================
// Single-step resolution
// =============================================================

#[test]
fn public_routes_render_without_session() {
    assert_eq!(resolve(AppRoute::Login, &anonymous()), Resolution::Render(ViewKind::Login));
    assert_eq!(resolve(AppRoute::Register, &anonymous()), Resolution::Render(ViewKind::Register));
    assert_eq!(resolve(AppRoute::NotFound, &anonymous()), Resolution::Render(ViewKind::NotFound));
}

#[test]
fn non_admin_at_fallback_path_renders_admin_users() {
    assert_eq!(resolve(AppRoute::AdminUsers, &user()), Resolution::Render(ViewKind::AdminUsers));
}

#[test]
fn non_admin_at_warehouse_managers_redirects_to_fallback() {
    assert_eq!(
        resolve(AppRoute::WarehouseManagers, &user()),
        Resolution::Redirect(ADMIN_FALLBACK_PATH)
    );
}

// =============================================================
// Full navigation
// =============================================================

#[test]
fn anonymous_profile_ends_on_login() {
    let nav = navigate(AppRoute::Profile, &anonymous());
    assert_eq!(nav.path, LOGIN_PATH);
    assert_eq!(nav.view, ViewKind::Login);
    assert_eq!(nav.redirects, vec![LOGIN_PATH]);
}

#[test]
fn root_ends_on_login_even_when_signed_in() {
    let nav = navigate(AppRoute::Root, &admin());
    assert_eq!(nav.path, LOGIN_PATH);
    assert!(nav.redirected());
}

#[test]
fn user_at_admin_lands_on_admin_users_view() {
    let nav = navigate(AppRoute::Admin, &user());
    assert_eq!(nav.path, ADMIN_USERS_PATH);
    assert_eq!(nav.view, ViewKind::AdminUsers);
    assert_eq!(nav.redirects, vec![ADMIN_USERS_PATH]);
}

#[test]
fn admin_at_admin_renders_in_place() {
    let nav = navigate(AppRoute::Admin, &admin());
    assert_eq!(nav.path, ADMIN_PATH);
    assert_eq!(nav.view, ViewKind::AdminUsers);
    assert!(!nav.redirected());
}

#[test]
fn admin_reaches_warehouse_managers() {
    let nav = navigate(AppRoute::WarehouseManagers, &admin());
    assert_eq!(nav.view, ViewKind::WarehouseManagers);
    assert!(!nav.redirected());
}

#[test]
fn anonymous_admin_routes_end_on_login() {
    for route in [AppRoute::Admin, AppRoute::AdminUsers, AppRoute::WarehouseManagers] {
        let nav = navigate(route, &anonymous());
        assert_eq!(nav.path, LOGIN_PATH, "{route:?}");
    }
}

#[test]
fn unknown_path_renders_not_found_in_place() {
    let nav = navigate(AppRoute::from_path("/nope"), &user());
    assert_eq!(nav.view, ViewKind::NotFound);
    assert!(!nav.redirected());
}

// =============================================================
// Redirect loops
// =============================================================

#[test]
fn redirect_cycle_is_cut_off_at_login() {
    let nav = follow(AppRoute::Profile, |current| match current {
        AppRoute::Profile => Resolution::Redirect(ADMIN_PATH),
        _ => Resolution::Redirect(PROFILE_PATH),
    });
    assert_eq!(nav.path, LOGIN_PATH);
    assert_eq!(nav.view, ViewKind::Login);
    assert_eq!(nav.redirects.len(), MAX_REDIRECTS + 1);
    assert_eq!(&nav.redirects[..2], [ADMIN_PATH, PROFILE_PATH]);
}

#[test]
fn redirect_chain_within_limit_renders() {
    let mut hops = 0;
    let nav = follow(AppRoute::Root, |current| {
        hops += 1;
        match current {
            AppRoute::Root => Resolution::Redirect(PROFILE_PATH),
            _ => Resolution::Render(ViewKind::Profile),
        }
    });
    assert_eq!(nav, Navigation { path: PROFILE_PATH, view: ViewKind::Profile, redirects: vec![PROFILE_PATH] });
    assert_eq!(hops, 2);
}

#[test]
fn table_has_no_redirect_loops() {
    let sessions = [anonymous(), user(), admin()];
    for session in &sessions {
        for route in AppRoute::ALL {
            assert!(navigate(route, session).redirects.len() <= 2, "{route:?}");
        }
    }
}
