//! Full-console render scenarios against a TestBackend.

use serde_json::{json, Map};

use ils_console::components::{Component, LookupConsole, LookupConsoleProps};
use ils_console::registry::ActionName;
use ils_console::state::{AppState, DispatchPhase};
use ils_console::testing::RenderHarness;
use ils_console::transport::{Fault, FaultList};

fn fault(message: &str) -> Fault {
    Fault {
        message: message.to_string(),
        extra: Map::new(),
    }
}

fn render(state: &AppState) -> String {
    let mut harness = RenderHarness::new(70, 24);
    let mut console = LookupConsole::new();
    harness.render_to_string_plain(|frame| {
        console.render(frame, frame.area(), LookupConsoleProps { state });
    })
}

#[test]
fn idle_console_shows_picker_and_form() {
    let state = AppState::new(ActionName::IsPartAvailable);
    let output = render(&state);

    assert!(output.contains("IsPartAvailable"));
    assert!(output.contains("GetPartsAvailability"));
    assert!(output.contains("UserId"));
    assert!(output.contains("Password"));
    assert!(output.contains("PN"));
    assert!(!output.contains("Calling ILS"));
}

#[test]
fn waiting_console_shows_the_call_marker() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Waiting;

    let output = render(&state);
    assert!(output.contains("Calling ILS.."));
}

#[test]
fn settled_available_part() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.body = Some(json!({"IsAvailable": "true"}));

    let output = render(&state);
    assert!(output.contains("Available"));
    assert!(!output.contains("Not Available"));
}

#[test]
fn settled_unavailable_part() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.body = Some(json!({"IsAvailable": "false"}));

    let output = render(&state);
    assert!(output.contains("Not Available"));
}

#[test]
fn settled_empty_body_shows_no_verdict() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.body = Some(json!({}));

    let output = render(&state);
    assert!(!output.contains("Available"));
}

#[test]
fn settled_single_fault() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.faults = Some(FaultList::One(fault("Part number not found")));

    let output = render(&state);
    assert!(output.contains("Part number not found"));
}

#[test]
fn settled_fault_list_in_order() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.faults = Some(FaultList::Many(vec![
        fault("Invalid credentials"),
        fault("Session expired"),
    ]));

    let output = render(&state);
    let first = output.find("Invalid credentials").expect("first fault");
    let second = output.find("Session expired").expect("second fault");
    assert!(first < second);
}

#[test]
fn failed_transport_shows_the_error() {
    let mut state = AppState::new(ActionName::IsPartAvailable);
    state.dispatch.phase = DispatchPhase::Failed;
    state.dispatch.transport_error = Some("connection refused".to_string());

    let output = render(&state);
    assert!(output.contains("connection refused"));
    assert!(!output.contains("Calling ILS"));
}

#[test]
fn settled_part_listings() {
    let mut state = AppState::new(ActionName::GetPartsAvailability);
    state.dispatch.phase = DispatchPhase::Settled;
    state.dispatch.body = Some(json!({
        "PartListings": {
            "PartListings": [{
                "Company": {
                    "Name": "Acme Aerospace",
                    "CompanyAddress": {
                        "Address1": "1 Hangar Rd",
                        "City": "Wichita",
                        "StateProvince": "KS",
                        "PostalCode": "67209",
                        "Country": "USA"
                    }
                }
            }]
        }
    }));

    let output = render(&state);
    assert!(output.contains("Acme Aerospace"));
    assert!(output.contains("1 Hangar Rd"));
    assert!(output.contains("Wichita, KS 67209"));
    assert!(output.contains("USA"));
}
