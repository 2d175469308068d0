//! Base layout shared by every page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::server::{
    form::Form, middleware::csrf::CSRF_FORM_FIELD, render::TemplateData,
};

/// Inline stylesheet for all pages.
pub const PAGE_CSS: &str = r#"
*{box-sizing:border-box;margin:0;padding:0;font-size:18px;font-family:"Ubuntu Mono",monospace}
html,body{height:100%}
body{line-height:1.5;background-color:#F1F3F6;color:#34495E;overflow-y:scroll}
header,nav,main,footer{padding:2px calc((100% - 800px)/2) 0}
main{margin-top:54px;margin-bottom:54px;min-height:calc(100vh - 345px);overflow:auto}
h1 a{font-size:36px;font-weight:bold;background-size:36px 36px;background-repeat:no-repeat;padding-left:50px;position:relative;top:12px;color:#34495E;text-decoration:none}
h2{font-size:22px;margin-bottom:36px;position:relative;top:-9px}
a{color:#62CB31}
a:hover{color:#4EB722;text-decoration:none}
textarea,input:not([type="submit"]){font-size:18px;font-family:"Ubuntu Mono",monospace}
header{background-image:-webkit-linear-gradient(left,#34495e,#34495e 25%,#9b59b6 25%,#9b59b6 35%,#3498db 35%,#3498db 45%,#62cb31 45%,#62cb31 55%,#ffb606 55%,#ffb606 65%,#e67e22 65%,#e67e22 75%,#e74c3c 85%,#e74c3c 85%,#c0392b 85%,#c0392b 100%);background-size:100% 6px;background-repeat:no-repeat;border-bottom:1px solid #E4E5E7;overflow:auto;padding-top:33px;padding-bottom:27px;text-align:center}
nav{border-bottom:1px solid #E4E5E7;padding-top:17px;padding-bottom:15px;background:#F7F9FA;height:60px;color:#6A6C6F}
nav a{margin-right:1.5em;display:inline-block}
nav form{display:inline-block;margin-left:1.5em}
nav div{width:50%;float:left}
nav div:last-child{text-align:right}
nav div:last-child a{margin-left:1.5em;margin-right:0}
nav a.live{color:#34495E;cursor:default}
nav a.live:hover{text-decoration:none}
nav a.live:after{content:'';display:block;position:relative;left:calc(50% - 7px);top:9px;width:14px;height:14px;background:#F7F9FA;border-left:1px solid #E4E5E7;border-bottom:1px solid #E4E5E7;-moz-transform:rotate(45deg);-webkit-transform:rotate(-45deg)}
button,input[type="submit"]{background-color:#62CB31;border-radius:3px;color:#FFFFFF;padding:18px 27px;border:none;display:inline-block;margin-top:18px;font-weight:700}
button:hover,input[type="submit"]:hover{background-color:#4EB722;color:#FFFFFF;cursor:pointer;text-decoration:none}
form div{margin-bottom:18px}
form div:last-child{border-top:1px dashed #E4E5E7}
form input[type="radio"]{position:relative;top:2px;margin-left:18px}
form input[type="text"],form input[type="password"],form input[type="email"]{padding:0.75em 18px;width:100%}
form input[type=text],form input[type="password"],form input[type="email"],textarea{color:#6A6C6F;background:#FFFFFF;border:1px solid #E4E5E7;border-radius:3px}
form label{display:inline-block;margin-bottom:9px}
.error{color:#C0392B;font-weight:bold;display:block}
.error+textarea,.error+input{border-color:#C0392B !important;border-width:2px !important}
textarea{padding:18px;width:100%;height:266px}
button,input[type="submit"],textarea,input:not([type="radio"]){outline:none}
.snippet{background-color:#FFFFFF;border:1px solid #E4E5E7;border-radius:3px}
.snippet pre{padding:18px;border-top:1px solid #E4E5E7;border-bottom:1px solid #E4E5E7}
.snippet .metadata{background-color:#F7F9FA;color:#6A6C6F;padding:0.75em 18px;overflow:auto}
.snippet .metadata span{float:right}
.snippet .metadata strong{color:#34495E}
.snippet .metadata time{display:inline-block}
.snippet .metadata time:first-child{float:left}
.snippet .metadata time:last-child{float:right}
div.flash{color:#FFFFFF;font-weight:bold;background-color:#34495E;padding:18px;margin-bottom:36px;text-align:center}
div.error{color:#FFFFFF;background-color:#C0392B;padding:18px;margin-bottom:36px;font-weight:bold;text-align:center}
table{background:white;border:1px solid #E4E5E7;border-collapse:collapse;width:100%}
td,th{text-align:left;padding:9px 18px}
th:last-child,td:last-child{text-align:right;color:#6A6C6F}
tr{border-bottom:1px solid #E4E5E7}
tr:nth-child(2n){background-color:#F7F9FA}
footer{border-top:1px solid #E4E5E7;padding-top:17px;padding-bottom:15px;background:#F7F9FA;height:60px;color:#6A6C6F;text-align:center}
"#;

/// Wraps a page body in the shared document, navigation, flash banner and footer.
pub fn base(title: &str, data: &TemplateData, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                nav {
                    div {
                        a href="/" { "Home" }
                        @if data.authenticated_user.is_some() {
                            a href="/snippet/create" { "Create snippet" }
                        }
                    }
                    div {
                        @if let Some(user) = &data.authenticated_user {
                            form action="/user/logout" method="POST" {
                                (csrf_field(data))
                                button { "Logout (" (user.name) ")" }
                            }
                        } @else {
                            a href="/user/signup" { "Signup" }
                            a href="/user/login" { "Login" }
                        }
                    }
                }
                main {
                    @if let Some(flash) = &data.flash {
                        div class="flash" { (flash) }
                    }
                    (main)
                }
                footer {
                    "Powered by Rust in " (data.current_year)
                }
            }
        }
    }
}

/// Hidden input echoing the request's CSRF token.
pub fn csrf_field(data: &TemplateData) -> Markup {
    html! {
        input type="hidden" name=(CSRF_FORM_FIELD) value=(data.csrf_token);
    }
}

/// Error label for `field`, empty when the field is valid.
pub fn field_error(form: &Form, field: &str) -> Markup {
    html! {
        @if let Some(message) = form.errors.get(field) {
            label class="error" { (message) }
        }
    }
}
