//! Bare forms for the auth routes; the application supplies real pages

use axum::response::Html;

use watchlist_auth::RegistrationErrors;

fn error_line(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<p class="error">{m}</p>"#))
        .unwrap_or_default()
}

pub(crate) fn login_form(action: &str, error: Option<&str>) -> Html<String> {
    Html(format!(
        r#"<form method="post" action="{action}">
<input name="username" placeholder="username">
<input name="password" type="password" placeholder="password">
{}<button type="submit">Log in</button>
</form>"#,
        error_line(error)
    ))
}

pub(crate) fn register_form(errors: &RegistrationErrors) -> Html<String> {
    Html(format!(
        r#"<form method="post" action="/register">
<input name="username" placeholder="username">
{}<input name="password" type="password" placeholder="password">
{}<input name="verify" type="password" placeholder="verify password">
{}<button type="submit">Register</button>
</form>"#,
        error_line(errors.username.as_deref()),
        error_line(errors.password.as_deref()),
        error_line(errors.verify.as_deref()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_shows_error() {
        let Html(body) = login_form("/login", Some("Invalid password"));
        assert!(body.contains(r#"<p class="error">Invalid password</p>"#));
        let Html(body) = login_form("/login", None);
        assert!(!body.contains("error"));
    }

    #[test]
    fn test_login_form_posts_to_given_path() {
        let Html(body) = login_form("/signin", None);
        assert!(body.contains(r#"action="/signin""#));
    }

    #[test]
    fn test_register_form_shows_field_errors() {
        let errors = RegistrationErrors {
            username: None,
            password: Some("That's not a valid password".to_string()),
            verify: None,
        };
        let Html(body) = register_form(&errors);
        assert_eq!(body.matches(r#"class="error""#).count(), 1);
        assert!(body.contains("That's not a valid password"));
    }
}
