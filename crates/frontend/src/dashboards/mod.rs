pub mod d410_portfolio;
pub mod d411_company_overview;
pub mod d412_company_revenue;
pub mod d413_company_cohorts;
pub mod d414_company_acquisition;
pub mod d415_company_billing;

pub use d410_portfolio::ui::PortfolioDashboard;
pub use d411_company_overview::ui::CompanyOverviewDashboard;
pub use d412_company_revenue::ui::CompanyRevenueDashboard;
pub use d413_company_cohorts::ui::CompanyCohortsDashboard;
pub use d414_company_acquisition::ui::CompanyAcquisitionDashboard;
pub use d415_company_billing::ui::CompanyBillingDashboard;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::DEFAULT_COMPANY_ID;

/// Company id from the route, falling back to the placeholder when absent.
pub(crate) fn use_company_id() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| {
        params
            .with(|p| p.get("company_id").filter(|id| !id.is_empty()))
            .unwrap_or_else(|| DEFAULT_COMPANY_ID.to_string())
    })
}
