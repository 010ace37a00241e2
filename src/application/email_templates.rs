const BRAND_NAME: &str = "Clarity";

/// Confirmation mail sent after a successful waitlist signup.
/// Returns `(subject, html)`.
pub fn waitlist_confirmation_email() -> (String, String) {
    let subject = String::from("Thanks for subscribing to our waitlist!");
    let html = format!(
        r#"<div style="font-family: sans-serif; padding: 20px;">
  <h2>🎉 Thanks for joining the waitlist!</h2>
  <p>Hey there,</p>
  <p>We're thrilled to have you on board. You'll be the first to know when we launch!</p>
  <p>– Team {BRAND_NAME} 🚀</p>
</div>"#
    );
    (subject, html)
}
