//! Command-line interface and report commands.

use std::path::PathBuf;

use budgetscope_core::budget::{BudgetService, BudgetVarianceRow, GlobalVariance};
use budgetscope_core::dashboard::{DashboardRequest, DashboardService};
use budgetscope_core::filter::{Scope, Selection};
use budgetscope_core::listing::{ExpenseQuery, ListingService, SortOrder};
use budgetscope_core::prediction::{ExpensePredictor, PredictionRequest};
use budgetscope_core::records::{
    CentreDirectory, Quarter, RecordSource, ResponsableLink, Snapshot,
};
use budgetscope_core::trend::TrendRange;
use budgetscope_shared::types::{CentreId, PageRequest};
use budgetscope_shared::{AppConfig, AppError, AppResult};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::predictor::SnapshotPredictor;
use crate::snapshot::JsonSnapshotSource;

/// Budgetscope - budget and expense reconciliation reports
#[derive(Parser, Debug)]
#[command(name = "budgetscope", version, about, long_about = None)]
pub struct Cli {
    /// Snapshot file (overrides snapshot.path from configuration)
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Reference date for trends, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Pretty-print the JSON report
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Year / quarter / centre selection, each "all" or a value.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Calendar year
    #[arg(long, default_value = "all")]
    pub year: String,

    /// Quarter, 1 to 4
    #[arg(long, default_value = "all")]
    pub quarter: String,

    /// Centre ID
    #[arg(long, default_value = "all")]
    pub centre: String,
}

impl SelectionArgs {
    fn selection(&self) -> AppResult<Selection> {
        Ok(Selection::parse(&self.year, &self.quarter, &self.centre)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dashboard figures: headline totals, centre ranking, trend, recent expenses
    ///
    /// When the selection names a centre, a quarter and a year, the matching
    /// prediction is attached.
    Dashboard {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Trend window: month, quarter or year (defaults to configuration)
        #[arg(long)]
        range: Option<String>,

        /// Centre shown by the trend, independent of the selection
        #[arg(long, default_value = "all")]
        trend_centre: String,

        /// Size of the top centres view (defaults to configuration)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// Budget comparison table for the selected budgets
    Variance {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Expense list with search, filters, sorting and pagination
    Expenses {
        /// Text matched against description or centre name
        #[arg(long, default_value = "")]
        search: String,

        /// Centre ID
        #[arg(long, default_value = "all")]
        centre: String,

        /// Earliest date, inclusive (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        from: String,

        /// Latest date, inclusive (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        to: String,

        /// Amount ordering: asc or desc
        #[arg(long, default_value = "desc")]
        sort: String,

        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Expense prediction for one centre and quarter
    Predict {
        /// Centre ID
        #[arg(long)]
        centre: String,

        /// Quarter, 1 to 4
        #[arg(long)]
        quarter: String,

        /// Calendar year
        #[arg(long)]
        year: i32,
    },
}

/// Budget comparison report.
#[derive(Debug, Serialize)]
struct VarianceReport {
    global: GlobalVariance,
    rows: Vec<BudgetVarianceRow>,
}

/// Runs the selected command and renders its report as JSON.
pub fn run(cli: &Cli, config: &AppConfig) -> AppResult<String> {
    let path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));
    let source = JsonSnapshotSource::new(path);
    let snapshot = source.snapshot()?;
    audit(&snapshot);

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let report = match &cli.command {
        Command::Dashboard {
            selection,
            range,
            trend_centre,
            top_n,
        } => {
            let selection = selection.selection()?;
            let trend_range: TrendRange = range
                .as_deref()
                .unwrap_or(&config.dashboard.trend_range)
                .parse()?;
            let request = DashboardRequest {
                selection,
                trend_range,
                trend_centre: centre_scope(trend_centre),
                top_n: top_n.unwrap_or(config.dashboard.top_n),
                recent_count: config.dashboard.recent_count,
            };
            debug!(?request, %today, "Building dashboard");

            let mut metrics = DashboardService::build(&snapshot, &request, today);
            if let Some(prediction_request) = prediction_request(&request.selection) {
                let predictor = SnapshotPredictor::new(source.predictions()?);
                metrics = metrics.with_prediction(predictor.predict(&prediction_request)?);
            }
            render(&metrics, cli.pretty)?
        }
        Command::Variance { selection } => {
            let selection = selection.selection()?;
            debug!(?selection, "Building budget comparison");

            let budgets = selection.filter_budgets(&snapshot.budgets);
            let report = VarianceReport {
                global: BudgetService::global(
                    selection.filter_expenses(&snapshot.expenses),
                    budgets.iter().copied(),
                ),
                rows: BudgetService::variance_table(
                    budgets,
                    &snapshot.expenses,
                    &snapshot.centres,
                ),
            };
            render(&report, cli.pretty)?
        }
        Command::Expenses {
            search,
            centre,
            from,
            to,
            sort,
            page,
        } => {
            let query = ExpenseQuery {
                centre: centre_scope(centre),
                ..ExpenseQuery::default()
            }
            .with_search(search.as_str())
            .with_date_range(from, to)?
            .with_sort(sort.parse::<SortOrder>()?)
            .with_page(PageRequest::new(*page, config.dashboard.page_size));
            debug!(?query, "Listing expenses");

            render(
                &ListingService::run(&snapshot.expenses, &snapshot.centres, &query),
                cli.pretty,
            )?
        }
        Command::Predict {
            centre,
            quarter,
            year,
        } => {
            let request = PredictionRequest {
                centre_id: CentreId::new(centre.as_str()),
                quarter: quarter.parse::<Quarter>()?,
                year: *year,
            };
            let predictor = SnapshotPredictor::new(source.predictions()?);
            if predictor.is_empty() {
                warn!("Snapshot holds no predictions");
            } else {
                info!(known = predictor.len(), "Loaded predictions");
            }

            render(&predictor.predict(&request)?, cli.pretty)?
        }
    };

    Ok(report)
}

/// Logs record problems the engine tolerates silently.
fn audit(snapshot: &Snapshot) {
    let malformed = snapshot.malformed_amounts();
    if malformed > 0 {
        warn!(count = malformed, "Malformed amounts counted as zero");
    }

    let orphans = snapshot.orphan_references();
    if orphans > 0 {
        warn!(count = orphans, "Records reference unknown centres");
    }

    for centre in &snapshot.centres {
        if let ResponsableLink::Stale(name) =
            CentreDirectory::responsable_link(centre, &snapshot.responsables)
        {
            warn!(centre = %centre.id, responsable = name, "Centre names an unknown responsable");
        }
    }
}

fn centre_scope(text: &str) -> Scope<CentreId> {
    let Ok(scope) = Scope::parse_with(text, str::parse::<CentreId>);
    scope
}

fn prediction_request(selection: &Selection) -> Option<PredictionRequest> {
    Some(PredictionRequest {
        centre_id: selection.centre.as_only()?.clone(),
        quarter: *selection.quarter.as_only()?,
        year: *selection.year.as_only()?,
    })
}

fn render<T: Serialize>(report: &T, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.map_err(|e| AppError::Internal(format!("Failed to render report: {e}")))
}
