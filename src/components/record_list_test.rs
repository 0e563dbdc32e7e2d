use super::*;
use crate::net::types::{UserRecord, WarehouseManager};

#[test]
fn record_lines_keep_payload_order() {
    let users = vec![
        UserRecord { id: 2, username: "admin".to_owned(), role: "admin".to_owned() },
        UserRecord { id: 1, username: "user".to_owned(), role: "user".to_owned() },
    ];
    assert_eq!(
        record_lines(&users),
        vec![(2, "admin - admin".to_owned()), (1, "user - user".to_owned())]
    );
}

#[test]
fn record_lines_for_warehouse_managers() {
    let managers = vec![WarehouseManager { id: 1, name: "Acme".to_owned(), contact: "a@x.com".to_owned() }];
    assert_eq!(record_lines(&managers), vec![(1, "Acme - a@x.com".to_owned())]);
}

#[test]
fn record_lines_empty_payload() {
    assert!(record_lines::<UserRecord>(&[]).is_empty());
}
