//! Enrolling a user in a course.

use coursehub_core::error::CoreError;
use coursehub_core::payment::{requires_payment, PaymentGateway, PaymentRequest};
use coursehub_core::types::DbId;
use coursehub_db::models::course::Course;
use coursehub_db::models::enrollment::Enrollment;
use coursehub_db::repositories::EnrollmentRepo;
use coursehub_db::DbPool;

use crate::error::{AppError, AppResult};

/// Enroll `user_id` in `course`.
///
/// Fails with `AlreadyEnrolled` when an enrollment exists, including one
/// created concurrently between the check and the insert. Paid courses must be
/// confirmed by `payments` first; a refusal is `PaymentRequired`.
pub async fn enroll(
    pool: &DbPool,
    payments: &dyn PaymentGateway,
    user_id: DbId,
    course: &Course,
) -> AppResult<Enrollment> {
    let already_enrolled = || {
        AppError::Core(CoreError::AlreadyEnrolled {
            course_slug: course.slug.clone(),
        })
    };

    if EnrollmentRepo::exists(pool, user_id, course.id).await? {
        return Err(already_enrolled());
    }

    if requires_payment(course.price_cents) {
        let request = PaymentRequest {
            user_id,
            course_id: course.id,
            amount_cents: course.price_cents,
        };
        let confirmed = payments.confirm_payment(&request).await.map_err(|e| {
            tracing::error!(
                gateway = payments.name(),
                user_id,
                course_id = course.id,
                error = %e,
                "Payment confirmation failed",
            );
            AppError::Core(CoreError::Internal(format!("Payment gateway error: {e}")))
        })?;

        if !confirmed {
            tracing::info!(
                gateway = payments.name(),
                user_id,
                course_id = course.id,
                "Payment not confirmed",
            );
            return Err(AppError::Core(CoreError::PaymentRequired(format!(
                "Payment required to enroll in '{}'",
                course.slug
            ))));
        }
    }

    let enrollment = EnrollmentRepo::create(pool, user_id, course.id)
        .await?
        .ok_or_else(already_enrolled)?;

    tracing::info!(user_id, course_id = course.id, "User enrolled");
    Ok(enrollment)
}
