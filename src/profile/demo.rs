//! Built-in sample profile
//!
//! Lets the dashboard be explored without a reachable backend.

use super::types::{fields, RawProfile};

/// Sample profile shown by the demo dashboard
pub fn demo_profile() -> RawProfile {
    RawProfile::new()
        .field(fields::NAME, "VISHVA VAAKINI I K")
        .field(fields::ROLL_NUMBER, "917722IT132")
        .field(fields::DEPARTMENT, "IT")
        .field(
            fields::COLLEGE,
            "Thiagarajar College of Engineering (TCE), Madurai",
        )
        .field(fields::YEAR, "(Pre-Final Year) 2026")
        .field(fields::RANK, "10316")
        .field(fields::LEVEL, "0/10")
        .field(fields::GOLD, "0")
        .field(fields::SILVER, "0")
        .field(fields::BRONZE, "421")
        .field(fields::PROGRAMS_SOLVED, "1251")
        .field(fields::CODE_TEST, "22")
        .field(fields::CODE_TRACK, "1050")
        .field(fields::DC, "55")
        .field(fields::DT, "102")
        .field(fields::CODE_TUTOR, "22")
        .field(fields::C, "564")
        .field(fields::PYTHON3, "288")
        .field(fields::JAVA, "220")
        .field(fields::CPP23, "178")
        .field(fields::CPP, "1")
}
