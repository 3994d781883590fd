//! Email bodies for enquiry notifications and auto-replies.

use crate::mail::Enquiry;

/// Subject line for the internal enquiry notification.
pub fn notification_subject(enquiry: &Enquiry) -> String {
    format!(
        "New Enquiry: {} - {}",
        enquiry.name(),
        enquiry.package.as_deref().unwrap_or("General")
    )
}

/// HTML body for the internal enquiry notification.
pub fn notification_html(enquiry: &Enquiry, submitted_at: &str) -> String {
    let package = enquiry
        .package
        .as_deref()
        .unwrap_or("No package selected");
    let message_block = enquiry
        .message
        .as_deref()
        .filter(|message| !message.is_empty())
        .map(|message| {
            format!(
                r#"
      <div class="field">
        <div class="label">Message:</div>
        <div class="value">{message}</div>
      </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: linear-gradient(135deg, #9333ea 0%, #3b82f6 100%); color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f7f7f7; padding: 20px; border-radius: 0 0 8px 8px; }}
    .field {{ margin-bottom: 15px; }}
    .label {{ font-weight: bold; color: #666; }}
    .value {{ margin-top: 5px; padding: 10px; background: white; border-radius: 4px; }}
    .footer {{ margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; text-align: center; color: #888; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h2 style="margin: 0;">New Enquiry from Discoverable</h2>
    </div>
    <div class="content">
      <div class="field">
        <div class="label">Name:</div>
        <div class="value">{name}</div>
      </div>
      <div class="field">
        <div class="label">Email:</div>
        <div class="value">{email}</div>
      </div>
      <div class="field">
        <div class="label">Website:</div>
        <div class="value">{website}</div>
      </div>
      <div class="field">
        <div class="label">Package Selected:</div>
        <div class="value">{package}</div>
      </div>{message_block}
      <div class="footer">
        <p>This enquiry was submitted at {submitted_at}</p>
      </div>
    </div>
  </div>
</body>
</html>
"#,
        name = enquiry.name(),
        email = enquiry.email(),
        website = enquiry.website(),
    )
}

/// Subject line for the submitter auto-reply.
pub fn auto_reply_subject() -> String {
    "Thank you for your enquiry - Discoverable".to_string()
}

/// HTML body for the submitter auto-reply.
pub fn auto_reply_html(enquiry: &Enquiry) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #9333ea;">Thank you for contacting Discoverable!</h2>
  <p>Hi {name},</p>
  <p>We've received your enquiry and will get back to you within 24 hours.</p>
  <p>Here's what you submitted:</p>
  <ul>
    <li><strong>Website:</strong> {website}</li>
    <li><strong>Package:</strong> {package}</li>
  </ul>
  <p>In the meantime, feel free to reply to this email if you have any questions.</p>
  <p>Best regards,<br>The Discoverable Team</p>
</div>
"#,
        name = enquiry.name(),
        website = enquiry.website(),
        package = enquiry.package.as_deref().unwrap_or("To be discussed"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enquiry() -> Enquiry {
        Enquiry {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            website: Some("https://example.com".to_string()),
            package: Some("Growth".to_string()),
            message: Some("Please audit our site.".to_string()),
        }
    }

    #[test]
    fn notification_subject_includes_name_and_package() {
        assert_eq!(
            notification_subject(&sample_enquiry()),
            "New Enquiry: Ada Lovelace - Growth"
        );

        let mut general = sample_enquiry();
        general.package = None;
        assert_eq!(
            notification_subject(&general),
            "New Enquiry: Ada Lovelace - General"
        );
    }

    #[test]
    fn notification_html_includes_all_fields() {
        let html = notification_html(&sample_enquiry(), "2026-08-08 12:00:00 UTC");
        assert!(html.contains("New Enquiry from Discoverable"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("https://example.com"));
        assert!(html.contains("Growth"));
        assert!(html.contains("Please audit our site."));
        assert!(html.contains("submitted at 2026-08-08 12:00:00 UTC"));
    }

    #[test]
    fn notification_html_omits_empty_message_and_defaults_package() {
        let mut enquiry = sample_enquiry();
        enquiry.package = None;
        enquiry.message = None;
        let html = notification_html(&enquiry, "now");
        assert!(html.contains("No package selected"));
        assert!(!html.contains("Message:"));
    }

    #[test]
    fn auto_reply_echoes_submission() {
        let html = auto_reply_html(&sample_enquiry());
        assert!(html.contains("Thank you for contacting Discoverable!"));
        assert!(html.contains("Hi Ada Lovelace,"));
        assert!(html.contains("https://example.com"));
        assert!(html.contains("Growth"));

        let mut bare = sample_enquiry();
        bare.package = None;
        assert!(auto_reply_html(&bare).contains("To be discussed"));
    }
}
