use crate::infra::parse_date;
use crate::render::{print_assessment, print_dashboard, print_recorded_visit};
use chrono::NaiveDate;
use clap::Args;
use rural_triage::error::AppError;
use rural_triage::triage::{
    write_visits_csv, Condition, Gender, PatientInput, RiskLevel, Symptom, TriageService,
    VisitFilter, VisitStorage, VisitSubmission, VitalsReading,
};

/// Vital sign readings; any that are omitted use the clinical baseline.
#[derive(Args, Debug, Default)]
pub(crate) struct VitalsArgs {
    /// Systolic blood pressure (mmHg)
    #[arg(long)]
    pub(crate) bp_systolic: Option<u16>,
    /// Diastolic blood pressure (mmHg)
    #[arg(long)]
    pub(crate) bp_diastolic: Option<u16>,
    /// Heart rate (bpm)
    #[arg(long)]
    pub(crate) heart_rate: Option<u16>,
    /// Body temperature (°F)
    #[arg(long)]
    pub(crate) temperature: Option<f64>,
    /// Oxygen saturation (%)
    #[arg(long)]
    pub(crate) spo2: Option<u8>,
}

impl From<VitalsArgs> for VitalsReading {
    fn from(args: VitalsArgs) -> Self {
        VitalsReading {
            bp_systolic: args.bp_systolic,
            bp_diastolic: args.bp_diastolic,
            heart_rate: args.heart_rate,
            temperature: args.temperature,
            spo2: args.spo2,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ClinicalArgs {
    /// Symptom tag such as chest_pain or high_fever (repeatable)
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<Symptom>,
    /// Pre-existing condition tag such as diabetes or copd (repeatable)
    #[arg(long = "condition")]
    pub(crate) conditions: Vec<Condition>,
    #[command(flatten)]
    pub(crate) vitals: VitalsArgs,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Patient age in years
    #[arg(long)]
    pub(crate) age: u8,
    #[command(flatten)]
    pub(crate) clinical: ClinicalArgs,
    /// List every rule that contributed to the score
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecordArgs {
    /// Patient name
    #[arg(long)]
    pub(crate) name: String,
    /// Patient age in years (0-120)
    #[arg(long)]
    pub(crate) age: u8,
    /// Male, Female or Other
    #[arg(long)]
    pub(crate) gender: Gender,
    /// Village or area
    #[arg(long)]
    pub(crate) village: String,
    /// Health worker recording the visit
    #[arg(long)]
    pub(crate) worker: Option<String>,
    /// Visit date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Free-text symptoms outside the standard list
    #[arg(long)]
    pub(crate) other_symptoms: Option<String>,
    #[command(flatten)]
    pub(crate) clinical: ClinicalArgs,
}

impl RecordArgs {
    pub(crate) fn into_submission(self) -> VisitSubmission {
        VisitSubmission {
            patient_name: self.name,
            age: self.age,
            gender: self.gender,
            village: self.village,
            health_worker: self.worker,
            visit_date: self.date,
            symptoms: self.clinical.symptoms,
            other_symptoms: self.other_symptoms,
            conditions: self.clinical.conditions,
            vitals: self.clinical.vitals.into(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Only show visits at this risk level (repeatable). Defaults to all levels.
    #[arg(long = "level")]
    pub(crate) levels: Vec<RiskLevel>,
    /// Only show visits from this village (repeatable). Defaults to all villages.
    #[arg(long = "village")]
    pub(crate) villages: Vec<String>,
    /// Write the visit list as CSV instead of the text report
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_assess<S>(
    service: &TriageService<S>,
    args: AssessArgs,
) -> Result<(), AppError>
where
    S: VisitStorage + 'static,
{
    let AssessArgs {
        age,
        clinical,
        explain,
        json,
    } = args;

    let input = PatientInput::new(age)
        .with_symptoms(clinical.symptoms)
        .with_conditions(clinical.conditions)
        .with_vitals(clinical.vitals.into());

    let explained = service.assess(&input);

    if json {
        let body = serde_json::to_string_pretty(&explained).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print_assessment(&explained, explain);
    }

    Ok(())
}

pub(crate) fn run_record<S>(
    service: &TriageService<S>,
    args: RecordArgs,
) -> Result<(), AppError>
where
    S: VisitStorage + 'static,
{
    let record = service.record(args.into_submission())?;
    print_recorded_visit(&record);
    Ok(())
}

pub(crate) fn run_dashboard<S>(
    service: &TriageService<S>,
    args: DashboardArgs,
) -> Result<(), AppError>
where
    S: VisitStorage + 'static,
{
    let filter = dashboard_filter(service, args.levels, args.villages);
    let dashboard = service.dashboard(Some(filter));

    if args.csv {
        let stdout = std::io::stdout();
        write_visits_csv(&dashboard.visits, stdout.lock())?;
    } else {
        print_dashboard(&dashboard);
    }

    Ok(())
}

/// An omitted filter selects everything recorded so far.
fn dashboard_filter<S>(
    service: &TriageService<S>,
    levels: Vec<RiskLevel>,
    villages: Vec<String>,
) -> VisitFilter
where
    S: VisitStorage + 'static,
{
    let defaults = VisitFilter::select_all(&service.store().all());
    VisitFilter {
        levels: if levels.is_empty() {
            defaults.levels
        } else {
            levels.into_iter().collect()
        },
        villages: if villages.is_empty() {
            defaults.villages
        } else {
            villages.into_iter().collect()
        },
    }
}
