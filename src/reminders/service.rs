use time::Date;
use tracing::{info, warn};

use crate::jobs::repo::Job;
use crate::mailer::MailClient;

/// Outcome of one dispatch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub sent: usize,
    pub failed: usize,
}

pub fn reminder_subject(job: &Job) -> String {
    format!("Reminder: {} at {}", job.title, job.company)
}

pub fn reminder_body(job: &Job) -> String {
    format!(
        "Don't forget to apply for {} at {}. Deadline is today.",
        job.title, job.company
    )
}

/// Sends one reminder per job due on `today`, addressed to each job's owner.
/// Sends are independent: a failed send is logged and counted, the rest of
/// the batch still runs. Repeat invocations on the same date re-send.
pub async fn dispatch(
    db: &sqlx::PgPool,
    mailer: &dyn MailClient,
    today: Date,
) -> Result<DispatchOutcome, sqlx::Error> {
    let due = Job::due_on(db, today).await?;
    let outcome = send_batch(mailer, &due).await;
    info!(
        %today,
        sent = outcome.sent,
        failed = outcome.failed,
        "reminder dispatch finished"
    );
    Ok(outcome)
}

async fn send_batch(mailer: &dyn MailClient, due: &[Job]) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();
    for job in due {
        let subject = reminder_subject(job);
        let body = reminder_body(job);
        match mailer.send(&job.email, &subject, &body).await {
            Ok(()) => outcome.sent += 1,
            Err(e) => {
                warn!(job_id = %job.id, owner = %job.email, error = %e, "reminder send failed");
                outcome.failed += 1;
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use time::OffsetDateTime;
    use uuid::Uuid;

    struct RecordingMailer {
        sent_to: Mutex<Vec<String>>,
        fail_for: Option<String>,
    }

    #[async_trait]
    impl MailClient for RecordingMailer {
        async fn send(&self, to: &str, _subject: &str, _body: &str) -> anyhow::Result<()> {
            self.sent_to.lock().unwrap().push(to.to_string());
            if self.fail_for.as_deref() == Some(to) {
                anyhow::bail!("smtp relay rejected recipient");
            }
            Ok(())
        }
    }

    fn job_for(email: &str, title: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            email: email.into(),
            title: title.into(),
            company: "Acme".into(),
            description: "desc".into(),
            deadline: time::macros::date!(2025 - 01 - 01),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn one_failed_send_does_not_stop_the_batch() {
        let mailer = RecordingMailer {
            sent_to: Mutex::new(Vec::new()),
            fail_for: Some("b@x.com".into()),
        };
        let due = vec![
            job_for("a@x.com", "Eng"),
            job_for("b@x.com", "Ops"),
            job_for("c@x.com", "Data"),
        ];

        let outcome = send_batch(&mailer, &due).await;

        assert_eq!(outcome, DispatchOutcome { sent: 2, failed: 1 });
        let attempted = mailer.sent_to.lock().unwrap();
        assert_eq!(attempted.as_slice(), ["a@x.com", "b@x.com", "c@x.com"]);
    }

    #[tokio::test]
    async fn empty_batch_sends_nothing() {
        let mailer = RecordingMailer {
            sent_to: Mutex::new(Vec::new()),
            fail_for: None,
        };
        let outcome = send_batch(&mailer, &[]).await;
        assert_eq!(outcome, DispatchOutcome::default());
        assert!(mailer.sent_to.lock().unwrap().is_empty());
    }

    #[test]
    fn reminder_template_references_title_and_company() {
        let job = job_for("a@x.com", "Eng");
        assert_eq!(reminder_subject(&job), "Reminder: Eng at Acme");
        assert_eq!(
            reminder_body(&job),
            "Don't forget to apply for Eng at Acme. Deadline is today."
        );
    }
}
