use crate::model::{
    Availability, ScheduleInput, ScheduleOutcome, ShiftTemplateId, ShiftToFill, Staff, StaffId,
    WarningKind,
};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import du personnel depuis CSV: header `id,display_name` (id vide = généré)
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Staff>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let display = rec.get(1).context("missing display_name")?.trim();
        if display.is_empty() {
            bail!("invalid staff row (empty display_name)");
        }
        let staff = if id.is_empty() {
            Staff::new(display)
        } else {
            Staff::with_id(id, display)
        };
        out.push(staff);
    }
    Ok(out)
}

/// Import des créneaux: header `date,shift_template_id,shift_name,required,duration_hours`
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftToFill>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = parse_date(rec.get(0).context("missing date")?)?;
        let template = rec.get(1).context("missing shift_template_id")?.trim();
        let name = rec.get(2).context("missing shift_name")?.trim();
        if template.is_empty() {
            bail!("invalid shift row (empty shift_template_id)");
        }
        let required: u32 = rec
            .get(3)
            .context("missing required")?
            .trim()
            .parse()
            .with_context(|| format!("invalid required count for {date} {template}"))?;
        let duration: f64 = rec
            .get(4)
            .context("missing duration_hours")?
            .trim()
            .parse()
            .with_context(|| format!("invalid duration for {date} {template}"))?;
        out.push(ShiftToFill::new(date, template, name, required, duration));
    }
    Ok(out)
}

/// Import des disponibilités: header `staff_id,date,shift_template_id[,available]`
/// (colonne `available` absente ou vide = disponible)
pub fn import_availability_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Availability> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Availability::default();
    for rec in rdr.records() {
        let rec = rec?;
        let staff = rec.get(0).context("missing staff_id")?.trim();
        let date = parse_date(rec.get(1).context("missing date")?)?;
        let template = rec.get(2).context("missing shift_template_id")?.trim();
        if staff.is_empty() || template.is_empty() {
            bail!("invalid availability row (empty)");
        }
        let available = match rec.get(3).map(str::trim) {
            Some(flag) if !flag.is_empty() => parse_bool(flag)
                .with_context(|| format!("invalid available value for {staff} on {date}"))?,
            _ => true,
        };
        out.set(
            StaffId::new(staff),
            date,
            ShiftTemplateId::new(template),
            available,
        );
    }
    Ok(out)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export JSON du résultat (jolie mise en forme)
pub fn export_outcome_json<P: AsRef<Path>>(path: P, outcome: &ScheduleOutcome) -> anyhow::Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(outcome)?;
    fs::write(path, s).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export CSV des affectations: header `staff_id,display_name,date,shift_template_id,shift_name`
pub fn export_assignments_csv<P: AsRef<Path>>(
    path: P,
    input: &ScheduleInput,
    outcome: &ScheduleOutcome,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "staff_id",
        "display_name",
        "date",
        "shift_template_id",
        "shift_name",
    ])?;
    for (staff, date, template) in outcome.assignments.iter() {
        let display = input
            .find_staff(staff)
            .map(|s| s.display_name.as_str())
            .unwrap_or("");
        let name = input
            .find_shift(date, template)
            .map(|s| s.shift_name.as_str())
            .unwrap_or("");
        let date = date.to_string();
        w.write_record([
            staff.as_str(),
            display,
            date.as_str(),
            template.as_str(),
            name,
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des alertes: header `type,severity,message,date,shift_template_id,assigned,required,staff_id`
pub fn export_warnings_csv<P: AsRef<Path>>(path: P, outcome: &ScheduleOutcome) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "type",
        "severity",
        "message",
        "date",
        "shift_template_id",
        "assigned",
        "required",
        "staff_id",
    ])?;
    let mut assigned_buf = itoa::Buffer::new();
    let mut required_buf = itoa::Buffer::new();
    for warning in &outcome.warnings {
        let severity = warning.severity.as_str();
        match &warning.kind {
            WarningKind::Understaffed {
                shift,
                assigned,
                required,
            } => {
                let date = shift.date.to_string();
                w.write_record([
                    warning.type_name(),
                    severity,
                    warning.message.as_str(),
                    date.as_str(),
                    shift.shift_template_id.as_str(),
                    assigned_buf.format(*assigned),
                    required_buf.format(*required),
                    "",
                ])?;
            }
            WarningKind::NoShifts { staff_id } => {
                w.write_record([
                    warning.type_name(),
                    severity,
                    warning.message.as_str(),
                    "",
                    "",
                    "",
                    "",
                    staff_id.as_str(),
                ])?;
            }
        }
    }
    w.flush()?;
    Ok(())
}
