//! Submission notification service
//!
//! Sends a plain-text email for every solve/fail recorded by the notifying
//! challenge type. Notification is best-effort: a missing destination
//! address or a transport failure is logged and swallowed, the submission
//! itself has already been committed by the time this runs.

use mail_send::{SmtpClientBuilder, mail_builder::MessageBuilder};

use crate::{
    config::SmtpConfig,
    db::repositories::TeamRepository,
    error::AppResult,
    models::{Challenge, SiteSettings, SubmissionOutcome, User},
    state::AppState,
    utils::escape::escape_text,
};

/// Subject line for notification mail
const MAIL_SUBJECT: &str = "Challenge submission";

/// Submission notification service
pub struct NotificationService;

impl NotificationService {
    /// Notify the configured address about a solve/fail submission
    ///
    /// Never returns an error: every failure path is logged and dropped so
    /// the submission transaction is unaffected.
    pub async fn notify_submission(
        state: &AppState,
        settings: &SiteSettings,
        outcome: SubmissionOutcome,
        user: &User,
        challenge: &Challenge,
        submission: &str,
    ) {
        let Some(address) = settings.notification_address.as_deref() else {
            tracing::error!(
                "failed to send email notification because \
                 challenge_notification_address is not set"
            );
            return;
        };

        let (account_name, account_id) = match Self::account_label(state, settings, user).await {
            Ok(label) => label,
            Err(e) => {
                tracing::error!(error = %e, "failed to resolve account for notification");
                return;
            }
        };

        let body = build_message(
            outcome,
            &account_name,
            account_id,
            &challenge.name,
            &challenge.category,
            submission,
        );

        // The transport is plain text today, but the body is escaped anyway
        // in case the mail layer ever grows HTML rendering.
        let body = escape_text(&body);

        if let Err(e) = Self::send(state.config().smtp.clone(), address, &body).await {
            tracing::error!(
                error = %e,
                address = %address,
                "an error occurred while trying to send email notification"
            );
        }
    }

    /// Name and id of the scoring account a submission belongs to
    async fn account_label(
        state: &AppState,
        settings: &SiteSettings,
        user: &User,
    ) -> AppResult<(String, i64)> {
        if settings.mode.is_teams() {
            if let Some(team_id) = user.team_id {
                if let Some(team) = TeamRepository::find_by_id(state.db(), team_id).await? {
                    return Ok((team.name, team.id));
                }
            }
        }

        Ok((user.name.clone(), user.id))
    }

    /// Deliver one notification over SMTP
    async fn send(smtp: SmtpConfig, address: &str, body: &str) -> AppResult<()> {
        let message = MessageBuilder::new()
            .from((smtp.from_name.as_str(), smtp.from_address.as_str()))
            .to(address)
            .subject(MAIL_SUBJECT)
            .text_body(body);

        let mut client = SmtpClientBuilder::new(smtp.host.as_str(), smtp.port);
        if let Some((username, password)) = smtp.credentials() {
            client = client.credentials((username, password));
        }

        client.connect().await?.send(message).await?;

        tracing::debug!(address = %address, "sent submission notification");

        Ok(())
    }
}

/// Build the plain-text notification body
fn build_message(
    outcome: SubmissionOutcome,
    account_name: &str,
    account_id: i64,
    challenge_name: &str,
    challenge_category: &str,
    submission: &str,
) -> String {
    let verb = match outcome {
        SubmissionOutcome::Solved => "SOLVED",
        SubmissionOutcome::Failed => "FAILED",
    };

    format!(
        "Hello,\n\
         \n\
         User {account_name} (id: {account_id}) just {verb} challenge \
         {challenge_name} of category {challenge_category} with key '{submission}'.\n\
         \n\
         Regards,\n\
         Computest Challenges\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_message_names_all_parts() {
        let body = build_message(
            SubmissionOutcome::Solved,
            "alice",
            42,
            "pwnme",
            "web",
            "CTF{flag}",
        );

        assert!(body.contains("alice"));
        assert!(body.contains("(id: 42)"));
        assert!(body.contains("SOLVED"));
        assert!(body.contains("pwnme"));
        assert!(body.contains("web"));
        assert!(body.contains("'CTF{flag}'"));
    }

    #[test]
    fn test_failed_message_uses_failed_verb() {
        let body = build_message(
            SubmissionOutcome::Failed,
            "bob",
            7,
            "re101",
            "reversing",
            "wrong",
        );

        assert!(body.contains("FAILED"));
        assert!(!body.contains("SOLVED"));
    }
}
