use super::*;

#[test]
fn missing_token_redirects_to_login() {
    assert_eq!(gate_decision(None), GateDecision::RedirectLogin);
}

#[test]
fn present_token_proceeds_with_value() {
    assert_eq!(
        gate_decision(Some("abc".to_owned())),
        GateDecision::Proceed("abc".to_owned())
    );
}
