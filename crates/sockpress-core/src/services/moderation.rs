//! Submission moderation: `pending -> approved | declined`.
//!
//! Approval writes to two tables without a transaction. The published id is
//! reserved on the submission row before the entity is written, so a failed
//! approval can be retried and will upsert the same entity instead of
//! publishing a duplicate. Declining such a submission withdraws the entity.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    ArticleSubmission, BrandSubmission, Draft, Identifiable, Reviewable, SubmissionStatus,
};
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, SubmissionRepository};

/// Outcome of a successful approval.
#[derive(Debug, Clone)]
pub struct Approval<S: Reviewable> {
    pub submission: S,
    pub published: S::Published,
}

/// Moderation workflow for one submission type.
pub struct ModerationService<S: Reviewable> {
    submissions: Arc<dyn SubmissionRepository<S>>,
    published: Arc<dyn BaseRepository<S::Published, Uuid>>,
}

pub type ArticleModeration = ModerationService<ArticleSubmission>;
pub type BrandModeration = ModerationService<BrandSubmission>;

impl<S: Reviewable> ModerationService<S> {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository<S>>,
        published: Arc<dyn BaseRepository<S::Published, Uuid>>,
    ) -> Self {
        Self {
            submissions,
            published,
        }
    }

    /// File a new pending submission.
    pub async fn submit(&self, author_id: Uuid, draft: S::Draft) -> Result<S, DomainError> {
        draft.validate()?;
        let submission = self.submissions.save(S::create(author_id, draft)).await?;
        tracing::info!(
            kind = S::KIND,
            submission_id = %submission.id(),
            author_id = %author_id,
            "Submission received"
        );
        Ok(submission)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<S>, DomainError> {
        Ok(self.submissions.find_by_id(id).await?)
    }

    pub async fn pending(&self) -> Result<Vec<S>, DomainError> {
        self.by_status(SubmissionStatus::Pending).await
    }

    pub async fn by_status(&self, status: SubmissionStatus) -> Result<Vec<S>, DomainError> {
        Ok(self.submissions.find_by_status(status).await?)
    }

    pub async fn by_author(&self, author_id: Uuid) -> Result<Vec<S>, DomainError> {
        Ok(self.submissions.find_by_author(author_id).await?)
    }

    /// Replace the payload of a submission that is still pending.
    pub async fn revise(&self, id: Uuid, draft: S::Draft) -> Result<S, DomainError> {
        draft.validate()?;
        let mut submission = self.require(id).await?;
        ensure_status(&submission, SubmissionStatus::Pending, "revise")?;

        submission.revise(draft);
        submission.touch();
        Ok(self.submissions.save(submission).await?)
    }

    /// Publish the submission and mark it approved.
    pub async fn approve(&self, id: Uuid) -> Result<Approval<S>, DomainError> {
        let mut submission = self.require(id).await?;
        ensure_status(&submission, SubmissionStatus::Pending, "approve")?;

        let published_id = match submission.review().published_entity_id {
            Some(reserved) => {
                tracing::debug!(
                    kind = S::KIND,
                    submission_id = %id,
                    published_id = %reserved,
                    "Resuming interrupted approval"
                );
                reserved
            }
            None => {
                let reserved = Uuid::new_v4();
                submission.review_mut().published_entity_id = Some(reserved);
                submission.touch();
                submission = self.submissions.save(submission).await?;
                reserved
            }
        };

        let published = self
            .published
            .save(submission.publish(published_id))
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    kind = S::KIND,
                    submission_id = %id,
                    published_id = %published_id,
                    error = %e,
                    "Publishing failed; submission left pending"
                );
            })?;

        submission.review_mut().status = SubmissionStatus::Approved;
        submission.touch();
        let submission = self.submissions.save(submission).await.inspect_err(|e| {
            tracing::warn!(
                kind = S::KIND,
                submission_id = %id,
                published_id = %published_id,
                error = %e,
                "Entity published but submission not marked approved; retry to complete"
            );
        })?;

        tracing::info!(
            kind = S::KIND,
            submission_id = %id,
            published_id = %published_id,
            "Submission approved"
        );

        Ok(Approval {
            submission,
            published,
        })
    }

    /// Decline a pending submission. An empty comment is rejected before
    /// anything is read or written.
    ///
    /// If an earlier approval was interrupted, the entity it may have
    /// published is withdrawn and the reservation cleared first.
    pub async fn decline(&self, id: Uuid, comment: &str) -> Result<S, DomainError> {
        let comment = required_comment(comment)?;
        let mut submission = self.require(id).await?;
        ensure_status(&submission, SubmissionStatus::Pending, "decline")?;

        if let Some(reserved) = submission.review().published_entity_id {
            match self.published.delete(reserved).await {
                Ok(()) | Err(RepoError::NotFound) => {}
                Err(e) => return Err(e.into()),
            }
            tracing::info!(
                kind = S::KIND,
                submission_id = %id,
                published_id = %reserved,
                "Withdrew entity from interrupted approval"
            );
        }

        let review = submission.review_mut();
        review.status = SubmissionStatus::Declined;
        review.moderation_comment = Some(comment);
        review.published_entity_id = None;
        submission.touch();
        let submission = self.submissions.save(submission).await?;

        tracing::info!(kind = S::KIND, submission_id = %id, "Submission declined");
        Ok(submission)
    }

    /// Edit the moderation comment of an already declined submission.
    pub async fn update_moderation_comment(
        &self,
        id: Uuid,
        comment: &str,
    ) -> Result<S, DomainError> {
        let comment = required_comment(comment)?;
        let mut submission = self.require(id).await?;
        ensure_status(&submission, SubmissionStatus::Declined, "edit the comment of")?;

        submission.review_mut().moderation_comment = Some(comment);
        submission.touch();
        Ok(self.submissions.save(submission).await?)
    }

    async fn require(&self, id: Uuid) -> Result<S, DomainError> {
        self.submissions
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: S::KIND,
                id,
            })
    }
}

fn required_comment(comment: &str) -> Result<String, DomainError> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(DomainError::Validation(
            "A moderation comment is required".into(),
        ));
    }
    Ok(comment.to_string())
}

fn ensure_status<S: Reviewable>(
    submission: &S,
    expected: SubmissionStatus,
    action: &str,
) -> Result<(), DomainError> {
    let status = submission.review().status;
    if status != expected {
        return Err(DomainError::InvalidTransition(format!(
            "cannot {action} a {status} submission"
        )));
    }
    Ok(())
}
