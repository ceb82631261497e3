use std::fmt::Write;

use tripnow_client::{RepositoryState, ReservationRow};

/// Plain-text rendering of the reservation list.
pub fn render(state: &RepositoryState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reservations ({})", state.total_reservations);

    if state.loading {
        let _ = writeln!(out, "  loading...");
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "  ! {}", error);
    }

    for reservation in &state.reservations {
        let row = ReservationRow::from(reservation);
        let _ = writeln!(
            out,
            "  #{:<5} {:<30} {:<15} x{:<3} [{}] {:>6.2} ({}) {}",
            row.id,
            row.customer_email,
            row.country,
            row.travelers,
            row.status_label,
            row.risk_score,
            row.risk_level,
            row.created,
        );
    }

    out
}
