//! Row validator for the canonical YamTrack schema.

use std::str::FromStr;

use tracing::{debug, trace};
use yam_model::{MediaType, Source, Status, TrackRow};

use crate::checks::{is_decimal_score, is_integer, is_iso_timestamp, is_present};

/// Outcome of validating a candidate row.
///
/// The contract is boolean at heart (`is_valid`); the failing field and
/// reason exist purely for diagnostics. Validation itself never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValidity {
    Valid,
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl RowValidity {
    pub fn is_valid(&self) -> bool {
        matches!(self, RowValidity::Valid)
    }

    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RowValidity::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Validates a candidate row against the YamTrack schema rules.
///
/// Rules run in a fixed order and short-circuit on the first failure:
/// required identifier fields, enumeration membership, the conditional
/// season/episode requirements, then the optional numeric and date fields.
/// Optional fields are skipped entirely when absent; when a value is present
/// it must parse, so an out-of-range score or a date that missed
/// normalization invalidates the whole row.
pub fn validate_row(row: &TrackRow) -> RowValidity {
    trace!(?row, "validating row");

    if !is_present(row.media_id.as_deref()) {
        return RowValidity::invalid("media_id", "media_id is required and cannot be blank");
    }

    match row.source.as_deref().filter(|v| !v.trim().is_empty()) {
        None => {
            return RowValidity::invalid("source", "source is required and cannot be blank");
        }
        Some(source) => {
            if Source::from_str(source).is_err() {
                return RowValidity::invalid("source", format!("source '{source}' is not allowed"));
            }
        }
    }

    let media_type = match row.media_type.as_deref().filter(|v| !v.trim().is_empty()) {
        None => {
            return RowValidity::invalid("media_type", "media_type is required");
        }
        Some(value) => match MediaType::from_str(value) {
            Ok(media_type) => media_type,
            Err(_) => {
                return RowValidity::invalid(
                    "media_type",
                    format!("media_type '{value}' is not allowed"),
                );
            }
        },
    };

    if media_type.requires_season_number() && !is_present(row.season_number.as_deref()) {
        return RowValidity::invalid(
            "season_number",
            format!("season_number is required when media_type = {media_type}"),
        );
    }

    if media_type.requires_episode_number() && !is_present(row.episode_number.as_deref()) {
        return RowValidity::invalid(
            "episode_number",
            format!("episode_number is required when media_type = {media_type}"),
        );
    }

    match row.status.as_deref().filter(|v| !v.trim().is_empty()) {
        None => {
            return RowValidity::invalid("status", "status is required");
        }
        Some(status) => {
            if Status::from_str(status).is_err() {
                return RowValidity::invalid("status", format!("status '{status}' is not allowed"));
            }
        }
    }

    if let Some(score) = row.score.as_deref().filter(|v| !v.trim().is_empty())
        && !is_decimal_score(score)
    {
        return RowValidity::invalid("score", "score must be a decimal between 0 and 10");
    }

    if let Some(progress) = row.progress.as_deref().filter(|v| !v.trim().is_empty())
        && !is_integer(progress)
    {
        return RowValidity::invalid("progress", "progress must be an integer");
    }

    for (field, value) in [
        ("start_date", row.start_date.as_deref()),
        ("end_date", row.end_date.as_deref()),
    ] {
        if let Some(date) = value.filter(|v| !v.trim().is_empty())
            && !is_iso_timestamp(date)
        {
            return RowValidity::invalid(
                field,
                format!("{field} must be an ISO-8601 timestamp with timezone"),
            );
        }
    }

    debug!("row is valid");
    RowValidity::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_row() -> TrackRow {
        TrackRow {
            source: Some("tmdb".to_string()),
            media_id: Some("12345".to_string()),
            media_type: Some("movie".to_string()),
            status: Some("Completed".to_string()),
            score: Some("8.7".to_string()),
            start_date: Some("2023-01-16 03:56:13+00:00".to_string()),
            ..TrackRow::default()
        }
    }

    #[test]
    fn accepts_well_formed_row() {
        assert!(validate_row(&valid_row()).is_valid());
    }

    #[test]
    fn first_failure_wins() {
        let row = TrackRow {
            media_id: None,
            source: Some("nowhere".to_string()),
            ..valid_row()
        };
        // media_id is checked before source membership.
        assert_eq!(
            validate_row(&row),
            RowValidity::invalid("media_id", "media_id is required and cannot be blank")
        );
    }

    #[test]
    fn conditional_number_checks_follow_media_type() {
        let season = TrackRow {
            media_type: Some("season".to_string()),
            ..valid_row()
        };
        assert!(matches!(
            validate_row(&season),
            RowValidity::Invalid {
                field: "season_number",
                ..
            }
        ));

        let episode = TrackRow {
            media_type: Some("episode".to_string()),
            season_number: Some("1".to_string()),
            ..valid_row()
        };
        assert!(matches!(
            validate_row(&episode),
            RowValidity::Invalid {
                field: "episode_number",
                ..
            }
        ));

        // An episode missing both numbers fails on season_number first.
        let bare_episode = TrackRow {
            media_type: Some("episode".to_string()),
            ..valid_row()
        };
        assert!(matches!(
            validate_row(&bare_episode),
            RowValidity::Invalid {
                field: "season_number",
                ..
            }
        ));
    }

    #[test]
    fn null_optional_fields_pass() {
        let row = TrackRow {
            score: None,
            start_date: None,
            end_date: None,
            progress: None,
            ..valid_row()
        };
        assert!(validate_row(&row).is_valid());
    }
}
