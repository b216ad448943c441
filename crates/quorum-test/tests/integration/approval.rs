#![allow(clippy::unused_async, clippy::too_many_lines)]
//! Approval-gate integration tests.
//!
//! Drives the dual-gate state machine through the HTTP surface: gate
//! decisions, authorization, rejection reasons and terminal rejection.

use salvo::http::StatusCode;

use quorum_test::component::types::Role;

use super::helpers::*;

fn approve(gate: &str) -> serde_json::Value {
    serde_json::json!({ "gate": gate, "decision": "approved" })
}

fn reject(gate: &str, reason: &str) -> serde_json::Value {
    serde_json::json!({
        "gate": gate,
        "decision": "rejected",
        "rejection_reason": reason,
    })
}

async fn seed_student_booking(service: &salvo::Service) -> uuid::Uuid {
    let payload = booking_payload(
        STUDY_ROOM_ID,
        Role::Student,
        "Emma Davis",
        "emma.davis@university.edu",
    );
    booking_id(&create_booking(service, &payload).await)
}

/// ## Summary
/// Test the straight-through approval flow: admin gate first, then faculty,
/// ending in an approved booking.
#[test_log::test(tokio::test)]
async fn admin_then_faculty_approval_reaches_approved() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    let after_admin = TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(after_admin["status"], "pending_faculty");
    assert_eq!(after_admin["admin_approval"], "approved");
    assert_eq!(after_admin["faculty_approval"], "pending");

    let after_faculty = TestRequest::patch(&approval_path(id))
        .acting(Role::Faculty, "sarah.wilson@university.edu")
        .json_body(&approve("faculty"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(after_faculty["status"], "approved");
    assert_eq!(after_faculty["faculty_approval"], "approved");
}

/// ## Summary
/// Test that a faculty approval before the admin gate leaves the booking
/// waiting on the admin gate, not the faculty gate.
#[test_log::test(tokio::test)]
async fn faculty_first_still_waits_on_admin() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    let after_faculty = TestRequest::patch(&approval_path(id))
        .acting(Role::Faculty, "sarah.wilson@university.edu")
        .json_body(&approve("faculty"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(after_faculty["faculty_approval"], "approved");
    assert_eq!(after_faculty["status"], "pending_admin");
}

/// ## Summary
/// Test that a rejection at the faculty gate is terminal: the status and
/// reason stick, and later gate updates are refused without mutation.
#[test_log::test(tokio::test)]
async fn rejection_is_terminal_and_freezes_gates() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let rejected = TestRequest::patch(&approval_path(id))
        .acting(Role::Faculty, "sarah.wilson@university.edu")
        .json_body(&reject("faculty", "Room double-booked"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["faculty_approval"], "rejected");
    assert_eq!(rejected["rejection_reason"], "Room double-booked");

    // Any further gate update is refused
    TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_kind("booking_closed");

    // The record itself is untouched by the refused update
    let frozen = TestRequest::get(&booking_path(id))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(frozen["status"], "rejected");
    assert_eq!(frozen["admin_approval"], "approved");
    assert_eq!(frozen["rejection_reason"], "Room double-booked");
}

/// ## Summary
/// Test that a rejection without a usable reason is refused and leaves the
/// booking unchanged.
#[test_log::test(tokio::test)]
async fn rejection_requires_non_blank_reason() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    // Missing reason entirely
    TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&serde_json::json!({ "gate": "admin", "decision": "rejected" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_kind("missing_rejection_reason");

    // Whitespace-only reason
    TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&reject("admin", "   "))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_kind("missing_rejection_reason");

    let unchanged = TestRequest::get(&booking_path(id))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(unchanged["status"], "pending_admin");
    assert_eq!(unchanged["admin_approval"], "pending");
    assert_eq!(unchanged["rejection_reason"], serde_json::Value::Null);
}

/// ## Summary
/// Test that a stray rejection reason on an approval is ignored rather
/// than stored or rejected.
#[test_log::test(tokio::test)]
async fn stray_reason_on_approval_is_ignored() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    let updated = TestRequest::patch(&approval_path(id))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&serde_json::json!({
            "gate": "admin",
            "decision": "approved",
            "rejection_reason": "should not be stored",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated["admin_approval"], "approved");
    assert_eq!(updated["rejection_reason"], serde_json::Value::Null);
}

/// ## Summary
/// Test that each gate only accepts its matching role.
#[test_log::test(tokio::test)]
async fn gate_role_mismatch_is_forbidden() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    let mismatches = [
        (Role::Faculty, "admin"),
        (Role::Admin, "faculty"),
        (Role::Student, "admin"),
        (Role::Student, "faculty"),
    ];

    for (role, gate) in mismatches {
        TestRequest::patch(&approval_path(id))
            .acting(role, "someone@university.edu")
            .json_body(&approve(gate))
            .send(&service)
            .await
            .assert_status(StatusCode::FORBIDDEN)
            .assert_error_kind("authorization");
    }

    // The denied updates must not have touched the record
    let unchanged = TestRequest::get(&booking_path(id))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(unchanged["status"], "pending_admin");
}

/// ## Summary
/// Test that a request without identity headers is refused before any
/// gate logic runs.
#[test_log::test(tokio::test)]
async fn missing_acting_user_is_unauthorized() {
    let service = create_test_service();
    let id = seed_student_booking(&service).await;

    TestRequest::patch(&approval_path(id))
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    // An unknown role string also resolves to anonymous
    TestRequest::patch(&approval_path(id))
        .header("x-acting-role", "professor")
        .header("x-acting-email", "someone@university.edu")
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// ## Summary
/// Test that a gate decision on an unknown booking returns 404.
#[test_log::test(tokio::test)]
async fn approval_on_unknown_booking_is_not_found() {
    let service = create_test_service();

    TestRequest::patch(&approval_path(uuid::Uuid::now_v7()))
        .acting(Role::Admin, "registrar@university.edu")
        .json_body(&approve("admin"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_kind("not_found");
}
