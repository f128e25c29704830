use serde::{Deserialize, Serialize};

/// The two directional lines operated by Estrella Tour. Static
/// configuration, never persisted as entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Route {
    #[serde(rename = "M_BA")]
    MercedesToCaba,
    #[serde(rename = "BA_M")]
    CabaToMercedes,
}

/// Daily operating hours for a route. Both boundary hours are inclusive:
/// a rule ending at 18 still departs at 18:00 and 18:30.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoursRule {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::MercedesToCaba, Route::CabaToMercedes];

    /// Human label shown on tickets and boarding proofs.
    pub fn label(&self) -> &'static str {
        match self {
            Route::MercedesToCaba => "Mercedes → CABA",
            Route::CabaToMercedes => "CABA → Mercedes",
        }
    }

    pub fn hours(&self) -> HoursRule {
        match self {
            Route::MercedesToCaba => HoursRule {
                start_hour: 5,
                end_hour: 18,
            },
            Route::CabaToMercedes => HoursRule {
                start_hour: 8,
                end_hour: 21,
            },
        }
    }
}
