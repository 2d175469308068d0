//! Signup and login pages.

use maud::{html, Markup};

use crate::server::{
    error::render::RenderError,
    form::GENERIC_ERROR_KEY,
    render::{
        layout::{base, csrf_field, field_error},
        pages::unexpected,
        Page, TemplateData, LOGIN_PAGE, SIGNUP_PAGE,
    },
};

/// Registration form. The password is never echoed back.
pub fn signup(data: &TemplateData) -> Result<Markup, RenderError> {
    let Page::Form(form) = &data.page else {
        return Err(unexpected(SIGNUP_PAGE, "form", &data.page));
    };

    let main = html! {
        form action="/user/signup" method="POST" novalidate {
            (csrf_field(data))
            div {
                label { "Name:" }
                (field_error(form, "name"))
                input type="text" name="name" value=(form.get("name"));
            }
            div {
                label { "Email:" }
                (field_error(form, "email"))
                input type="email" name="email" value=(form.get("email"));
            }
            div {
                label { "Password:" }
                (field_error(form, "password"))
                input type="password" name="password";
            }
            div {
                input type="submit" value="Signup";
            }
        }
    };

    Ok(base("Signup", data, main))
}

/// Login form. Credential failures are shown as one generic error above the fields.
pub fn login(data: &TemplateData) -> Result<Markup, RenderError> {
    let Page::Form(form) = &data.page else {
        return Err(unexpected(LOGIN_PAGE, "form", &data.page));
    };

    let main = html! {
        form action="/user/login" method="POST" novalidate {
            (csrf_field(data))
            @if let Some(message) = form.errors.get(GENERIC_ERROR_KEY) {
                div class="error" { (message) }
            }
            div {
                label { "Email:" }
                input type="email" name="email" value=(form.get("email"));
            }
            div {
                label { "Password:" }
                input type="password" name="password";
            }
            div {
                input type="submit" value="Login";
            }
        }
    };

    Ok(base("Login", data, main))
}

#[cfg(test)]
mod tests {
    use crate::server::{
        form::{Form, GENERIC_ERROR_KEY},
        render::{pages::user, Page, TemplateData},
    };

    fn data(form: Form) -> TemplateData {
        TemplateData {
            page: Page::Form(form),
            ..Default::default()
        }
    }

    /// Expect the duplicate email error next to the email field and the password left blank
    #[test]
    fn signup_redisplays_errors() {
        let mut form = Form::new([
            ("name", "Bob"),
            ("email", "alice@example.com"),
            ("password", "hunter22"),
        ]);
        form.errors.add("email", "Address is already in use");

        let html = user::signup(&data(form)).unwrap().into_string();

        assert!(html.contains("Address is already in use"));
        assert!(html.contains(r#"value="alice@example.com""#));
        assert!(!html.contains("hunter22"));
    }

    /// Expect the generic error banner on the login page
    #[test]
    fn login_shows_generic_error() {
        let mut form = Form::new([("email", "alice@example.com"), ("password", "wrong")]);
        form.errors
            .add(GENERIC_ERROR_KEY, "Email or Password is incorrect");

        let html = user::login(&data(form)).unwrap().into_string();

        assert!(html.contains(r#"<div class="error">Email or Password is incorrect</div>"#));
        assert!(!html.contains("wrong"));
    }

    /// Expect a non-form payload to be rejected
    #[test]
    fn rejects_non_form_payload() {
        let data = TemplateData::default();

        assert!(user::login(&data).is_err());
        assert!(user::signup(&data).is_err());
    }
}
