use shared::models::{VoteRecord, VoteStatus};
use sqlx::error::ErrorKind;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// Stateless orchestration over the store's transactional primitives. Both
/// mutating operations touch two rows (ledger entry + feature counter) and
/// run inside a single transaction; a dropped transaction rolls back, so no
/// partial state ever commits.
pub struct VoteEngine;

impl VoteEngine {
    /// Records an upvote for (`user_uuid`, `feature_id`).
    ///
    /// The ledger insert runs first: it either succeeds or trips the
    /// `UNIQUE (user_uuid, feature_id)` constraint, which is the
    /// authoritative duplicate-vote signal. The counter bump follows, its
    /// row count doubling as the feature-existence check; zero rows rolls
    /// the whole transaction, insert included, back. Both mutating
    /// operations lock ledger before feature row so concurrent cast and
    /// withdraw for one pair cannot deadlock.
    #[instrument(skip(pool))]
    pub async fn cast(
        pool: &PgPool,
        feature_id: Uuid,
        user_uuid: Uuid,
    ) -> Result<VoteRecord, ApiError> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, VoteRecord>(
            "INSERT INTO feature_votes (id, user_uuid, feature_id)
             VALUES ($1, $2, $3)
             RETURNING id, user_uuid, feature_id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_uuid)
        .bind(feature_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => ApiError::AlreadyVoted,
            _ => ApiError::Internal(e.to_string()),
        })?;

        let bumped = sqlx::query(
            "UPDATE features SET vote_count = vote_count + 1, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(feature_id)
        .execute(&mut *tx)
        .await?;

        if bumped.rows_affected() == 0 {
            return Err(ApiError::FeatureNotFound);
        }

        tx.commit().await?;
        debug!(%feature_id, %user_uuid, "vote cast");
        Ok(record)
    }

    /// Removes the vote for (`user_uuid`, `feature_id`) and decrements the
    /// counter. Withdrawing a vote that was never cast is an error, not a
    /// no-op. The feature itself may have been deleted out-of-band by the
    /// catalog; the orphaned ledger entry is still removed and the
    /// decrement becomes a no-op.
    #[instrument(skip(pool))]
    pub async fn withdraw(
        pool: &PgPool,
        feature_id: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), ApiError> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM feature_votes WHERE feature_id = $1 AND user_uuid = $2",
        )
        .bind(feature_id)
        .bind(user_uuid)
        .execute(&mut *tx)
        .await?;

        if deleted.rows_affected() == 0 {
            return Err(ApiError::VoteNotFound);
        }

        let dropped = sqlx::query(
            "UPDATE features SET vote_count = GREATEST(vote_count - 1, 0), updated_at = NOW()
             WHERE id = $1",
        )
        .bind(feature_id)
        .execute(&mut *tx)
        .await?;

        if dropped.rows_affected() == 0 {
            warn!(%feature_id, "withdrew a vote for a feature that no longer exists");
        }

        tx.commit().await?;
        debug!(%feature_id, %user_uuid, "vote withdrawn");
        Ok(())
    }

    /// Read-only lookup; forgiving by design, a deleted feature simply
    /// reports `has_voted: false`.
    pub async fn status(
        pool: &PgPool,
        feature_id: Uuid,
        user_uuid: Uuid,
    ) -> Result<VoteStatus, ApiError> {
        let voted_at: Option<OffsetDateTime> = sqlx::query_scalar(
            "SELECT created_at FROM feature_votes WHERE feature_id = $1 AND user_uuid = $2",
        )
        .bind(feature_id)
        .bind(user_uuid)
        .fetch_optional(pool)
        .await?;

        Ok(VoteStatus {
            has_voted: voted_at.is_some(),
            voted_at,
        })
    }

    /// Repair procedure for counter drift: sweeps ledger entries whose
    /// feature vanished, then resets any `vote_count` that disagrees with
    /// the ledger cardinality. The only path allowed to write the counter
    /// to an absolute value. Returns the number of repaired counters.
    pub async fn reconcile_vote_counts(pool: &PgPool) -> Result<u64, ApiError> {
        let mut tx = pool.begin().await?;

        let swept = sqlx::query(
            "DELETE FROM feature_votes v
             WHERE NOT EXISTS (SELECT 1 FROM features f WHERE f.id = v.feature_id)",
        )
        .execute(&mut *tx)
        .await?;

        if swept.rows_affected() > 0 {
            warn!("swept {} orphaned vote entries", swept.rows_affected());
        }

        let repaired = sqlx::query(
            "UPDATE features f
             SET vote_count = tallied.actual, updated_at = NOW()
             FROM (
                 SELECT f2.id, COUNT(v.id)::int AS actual
                 FROM features f2
                 LEFT JOIN feature_votes v ON v.feature_id = f2.id
                 GROUP BY f2.id
             ) AS tallied
             WHERE tallied.id = f.id AND f.vote_count <> tallied.actual",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(repaired.rows_affected())
    }
}
