//! Core data models for the budget panel and the scholarship tracker.
//! Categories are kept in display order; the donut chart and legend are
//! derived from them on every render.

use chrono::{Days, NaiveDate};

use crate::error::{BudgetError, ScholarshipError};

/// Swatches offered for categories (blue theme).
pub const PALETTE: [&str; 5] = ["#1f2937", "#3b82f6", "#60a5fa", "#93c5fd", "#2563eb"];

/// Donut fill when there is nothing to chart.
pub const EMPTY_DONUT: &str = "#e5e7eb";

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub amount: f64,
    pub color: String,
}

impl Category {
    pub fn new(name: &str, amount: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            amount,
            color: color.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Budget {
    pub categories: Vec<Category>,
}

impl Default for Budget {
    fn default() -> Self {
        // sums to 250.00
        Self {
            categories: vec![
                Category::new("Food", 75.0, PALETTE[0]),
                Category::new("Transportation", 62.5, PALETTE[1]),
                Category::new("Orders", 50.0, PALETTE[3]),
                Category::new("Grocery", 62.5, PALETTE[2]),
            ],
        }
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Parses a user-typed amount. Only finite values above zero are accepted.
pub fn parse_amount(raw: &str) -> Result<f64, BudgetError> {
    parse_positive(raw).ok_or_else(|| BudgetError::InvalidAmount(raw.to_string()))
}

impl Budget {
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.categories.iter().map(|c| c.amount).sum()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        let lower = name.to_lowercase();
        self.categories
            .iter()
            .position(|c| c.name.to_lowercase() == lower)
    }

    /// CSS background for the donut: one conic-gradient stop per category.
    pub fn donut_background(&self) -> String {
        let total = self.total();
        if total <= 0.0 {
            return EMPTY_DONUT.to_string();
        }
        let mut start = 0.0;
        let stops: Vec<String> = self
            .categories
            .iter()
            .map(|c| {
                let deg = c.amount / total * 360.0;
                let seg = format!("{} {}deg {}deg", c.color, start, start + deg);
                start += deg;
                seg
            })
            .collect();
        format!("conic-gradient({})", stops.join(", "))
    }

    /// Share of the total for each category, in percent.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.categories
            .iter()
            .map(|c| if total > 0.0 { c.amount / total * 100.0 } else { 0.0 })
            .collect()
    }

    pub fn add(&mut self, name: &str, amount: &str, color: &str) -> Result<&Category, BudgetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::EmptyName);
        }
        if self.position_of(name).is_some() {
            return Err(BudgetError::DuplicateName(name.to_string()));
        }
        let amount = parse_amount(amount)?;
        self.categories.push(Category::new(name, amount, color));
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Updates a category in place. A blank name or amount keeps the current value.
    pub fn edit(&mut self, index: usize, name: &str, amount: &str) -> Result<(), BudgetError> {
        let current = self
            .categories
            .get(index)
            .ok_or(BudgetError::NoSuchCategory(index))?;
        let name = match name.trim() {
            "" => current.name.clone(),
            n => n.to_string(),
        };
        let amount = match amount.trim() {
            "" => current.amount,
            a => parse_amount(a)?,
        };
        if let Some(other) = self.position_of(&name) {
            if other != index {
                return Err(BudgetError::DuplicateName(name));
            }
        }
        let cat = &mut self.categories[index];
        cat.name = name;
        cat.amount = amount;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Category, BudgetError> {
        if index >= self.categories.len() {
            return Err(BudgetError::NoSuchCategory(index));
        }
        Ok(self.categories.remove(index))
    }

    pub fn set_color(&mut self, index: usize, color: &str) -> Result<(), BudgetError> {
        let cat = self
            .categories
            .get_mut(index)
            .ok_or(BudgetError::NoSuchCategory(index))?;
        cat.color = color.to_string();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scholarship tracker
// ---------------------------------------------------------------------------

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
pub const SCHOLARSHIP_TYPES: [&str; 4] = ["Academic", "Athletic", "Need-based", "Government"];
pub const DURATIONS: [&str; 4] = ["1 semester", "1 year", "2 years", "4 years"];
pub const SEMESTERS: [&str; 3] = ["1st semester", "2nd semester", "Summer"];

/// New requirements are due this many days after they are added.
pub const REQUIREMENT_LEAD_DAYS: u64 = 30;

/// Years offered by the form: two either side of `current`.
pub fn year_options(current: i32) -> Vec<i32> {
    (current - 2..=current + 2).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequirementStatus {
    Active,
    Pending,
}

impl RequirementStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequirementStatus::Active => "Active",
            RequirementStatus::Pending => "Pending",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RequirementStatus::Active => "status-active",
            RequirementStatus::Pending => "status-pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Requirement {
    pub title: String,
    pub status: RequirementStatus,
    pub deadline: NaiveDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyPayout {
    pub month: String,
    pub amount: f64,
}

/// Scholarship form contents as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScholarshipForm {
    pub kind: String,
    pub name: String,
    pub duration: String,
    pub semester: String,
    pub year: i32,
    pub month: String,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScholarshipEntry {
    pub kind: String,
    pub name: String,
    pub duration: String,
    pub semester: String,
    pub year: i32,
    pub month: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scholarship {
    /// Kept in calendar order.
    pub payouts: Vec<MonthlyPayout>,
    pub requirements: Vec<Requirement>,
    pub entries: Vec<ScholarshipEntry>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn month_index(month: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == month)
}

impl Default for Scholarship {
    fn default() -> Self {
        let payouts = MONTHS[..5]
            .iter()
            .map(|m| MonthlyPayout {
                month: m.to_string(),
                amount: 4000.0,
            })
            .collect();
        let requirement = |title: &str, status, deadline| Requirement {
            title: title.to_string(),
            status,
            deadline,
        };
        Self {
            payouts,
            requirements: vec![
                requirement("Maintain GPA 3.5+", RequirementStatus::Active, date(2025, 12, 15)),
                requirement("Submit progress report", RequirementStatus::Pending, date(2025, 11, 30)),
                requirement("Community service 20hrs", RequirementStatus::Active, date(2026, 1, 15)),
            ],
            entries: Vec::new(),
        }
    }
}

impl Scholarship {
    /// Bar width for each payout, in percent of the largest one.
    pub fn progress_widths(&self) -> Vec<f64> {
        let max = self.payouts.iter().map(|p| p.amount).fold(0.0, f64::max);
        self.payouts
            .iter()
            .map(|p| if max > 0.0 { p.amount / max * 100.0 } else { 0.0 })
            .collect()
    }

    /// Adds a pending requirement due `REQUIREMENT_LEAD_DAYS` after `today`.
    pub fn add_requirement(
        &mut self,
        title: &str,
        today: NaiveDate,
    ) -> Result<&Requirement, ScholarshipError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ScholarshipError::EmptyRequirement);
        }
        let deadline = today
            .checked_add_days(Days::new(REQUIREMENT_LEAD_DAYS))
            .unwrap_or(today);
        self.requirements.push(Requirement {
            title: title.to_string(),
            status: RequirementStatus::Pending,
            deadline,
        });
        Ok(&self.requirements[self.requirements.len() - 1])
    }

    /// Records a saved form. Its amount becomes the payout for that month.
    pub fn save(&mut self, form: &ScholarshipForm) -> Result<&ScholarshipEntry, ScholarshipError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ScholarshipError::EmptyName);
        }
        let amount = parse_positive(&form.amount)
            .ok_or_else(|| ScholarshipError::InvalidAmount(form.amount.clone()))?;
        let slot = month_index(&form.month)
            .ok_or_else(|| ScholarshipError::UnknownMonth(form.month.clone()))?;

        match self.payouts.iter_mut().find(|p| p.month == form.month) {
            Some(p) => p.amount = amount,
            None => {
                let at = self
                    .payouts
                    .iter()
                    .position(|p| month_index(&p.month).is_some_and(|i| i > slot))
                    .unwrap_or(self.payouts.len());
                self.payouts.insert(
                    at,
                    MonthlyPayout {
                        month: form.month.clone(),
                        amount,
                    },
                );
            }
        }
        self.entries.push(ScholarshipEntry {
            kind: form.kind.clone(),
            name: name.to_string(),
            duration: form.duration.clone(),
            semester: form.semester.clone(),
            year: form.year,
            month: form.month.clone(),
            amount,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_totals_250() {
        let b = Budget::default();
        assert_eq!(b.categories.len(), 4);
        assert_eq!(b.total(), 250.0);
    }

    #[test]
    fn donut_stops_cover_full_circle() {
        let mut b = Budget::empty();
        b.add("Rent", "300", "#111111").unwrap();
        b.add("Food", "100", "#222222").unwrap();
        assert_eq!(
            b.donut_background(),
            "conic-gradient(#111111 0deg 270deg, #222222 270deg 360deg)"
        );
        assert_eq!(b.shares(), vec![75.0, 25.0]);
    }

    #[test]
    fn empty_budget_uses_placeholder_fill() {
        assert_eq!(Budget::empty().donut_background(), EMPTY_DONUT);
    }

    #[test]
    fn add_trims_and_appends() {
        let mut b = Budget::default();
        let added = b.add("  Books ", "12.5", PALETTE[4]).unwrap();
        assert_eq!(added.name, "Books");
        assert_eq!(b.total(), 262.5);
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut b = Budget::default();
        assert_eq!(b.add("   ", "10", PALETTE[0]), Err(BudgetError::EmptyName));
    }

    #[test]
    fn add_rejects_duplicate_regardless_of_case() {
        let mut b = Budget::default();
        let err = b.add("food", "10", PALETTE[0]).unwrap_err();
        assert_eq!(err, BudgetError::DuplicateName("food".into()));
        assert_eq!(err.to_string(), "Category already exists");
    }

    #[test]
    fn add_rejects_bad_amounts_without_touching_state() {
        let mut b = Budget::default();
        for raw in ["", "abc", "0", "-5", "NaN", "inf"] {
            assert!(matches!(
                b.add("Savings", raw, PALETTE[0]),
                Err(BudgetError::InvalidAmount(_))
            ));
        }
        assert_eq!(b, Budget::default());
    }

    #[test]
    fn edit_blank_fields_keep_old_values() {
        let mut b = Budget::default();
        b.edit(1, "", "").unwrap();
        assert_eq!(b.categories[1], Budget::default().categories[1]);
        b.edit(1, "Commute", "").unwrap();
        assert_eq!(b.categories[1].name, "Commute");
        assert_eq!(b.categories[1].amount, 62.5);
        b.edit(1, "", "80").unwrap();
        assert_eq!(b.categories[1].amount, 80.0);
    }

    #[test]
    fn edit_rejects_non_positive_and_unparsable() {
        let mut b = Budget::default();
        assert!(b.edit(0, "Food", "-1").is_err());
        assert!(b.edit(0, "Food", "lots").is_err());
        assert_eq!(b.categories[0].amount, 75.0);
    }

    #[test]
    fn edit_allows_recasing_own_name_but_not_taking_another() {
        let mut b = Budget::default();
        b.edit(0, "FOOD", "").unwrap();
        assert_eq!(b.categories[0].name, "FOOD");
        assert_eq!(
            b.edit(0, "orders", ""),
            Err(BudgetError::DuplicateName("orders".into()))
        );
    }

    #[test]
    fn out_of_range_indexes_are_reported() {
        let mut b = Budget::default();
        assert_eq!(b.edit(9, "x", "1"), Err(BudgetError::NoSuchCategory(9)));
        assert_eq!(b.remove(9), Err(BudgetError::NoSuchCategory(9)));
        assert_eq!(b.set_color(9, PALETTE[0]), Err(BudgetError::NoSuchCategory(9)));
    }

    #[test]
    fn remove_and_recolor() {
        let mut b = Budget::default();
        let removed = b.remove(0).unwrap();
        assert_eq!(removed.name, "Food");
        assert_eq!(b.total(), 175.0);
        b.set_color(0, PALETTE[4]).unwrap();
        assert_eq!(b.categories[0].color, PALETTE[4]);
    }

    fn form(name: &str, month: &str, amount: &str) -> ScholarshipForm {
        ScholarshipForm {
            kind: SCHOLARSHIP_TYPES[0].into(),
            name: name.into(),
            duration: DURATIONS[1].into(),
            semester: SEMESTERS[0].into(),
            year: 2025,
            month: month.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn year_options_surround_current_year() {
        assert_eq!(year_options(2025), vec![2023, 2024, 2025, 2026, 2027]);
    }

    #[test]
    fn progress_widths_scale_to_largest_payout() {
        let mut s = Scholarship::default();
        assert!(s.progress_widths().iter().all(|w| *w == 100.0));
        s.payouts[1].amount = 2000.0;
        s.payouts[3].amount = 8000.0;
        assert_eq!(s.progress_widths(), vec![50.0, 25.0, 50.0, 100.0, 50.0]);
        s.payouts.clear();
        assert!(s.progress_widths().is_empty());
    }

    #[test]
    fn zero_payouts_have_empty_bars() {
        let mut s = Scholarship::default();
        for p in &mut s.payouts {
            p.amount = 0.0;
        }
        assert!(s.progress_widths().iter().all(|w| *w == 0.0));
    }

    #[test]
    fn new_requirement_is_pending_and_due_in_thirty_days() {
        let mut s = Scholarship::default();
        let today = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        let added = s.add_requirement("  Renew ID ", today).unwrap();
        assert_eq!(added.title, "Renew ID");
        assert_eq!(added.status, RequirementStatus::Pending);
        assert_eq!(added.deadline, NaiveDate::from_ymd_opt(2026, 1, 9).unwrap());
        assert_eq!(s.requirements.len(), 4);
    }

    #[test]
    fn blank_requirement_is_rejected() {
        let mut s = Scholarship::default();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(s.add_requirement("  ", today), Err(ScholarshipError::EmptyRequirement));
        assert_eq!(s, Scholarship::default());
    }

    #[test]
    fn status_badges() {
        assert_eq!(RequirementStatus::Active.label(), "Active");
        assert_eq!(RequirementStatus::Pending.css_class(), "status-pending");
    }

    #[test]
    fn save_updates_existing_month() {
        let mut s = Scholarship::default();
        let entry = s.save(&form(" Dean's list ", "March", "5000")).unwrap();
        assert_eq!(entry.name, "Dean's list");
        assert_eq!(entry.amount, 5000.0);
        assert_eq!(s.payouts[2].amount, 5000.0);
        assert_eq!(s.payouts.len(), 5);
        assert_eq!(s.entries.len(), 1);
    }

    #[test]
    fn save_inserts_new_month_in_calendar_order() {
        let mut s = Scholarship::default();
        s.save(&form("Grant", "September", "2500")).unwrap();
        s.save(&form("Grant", "July", "1500")).unwrap();
        let months: Vec<&str> = s.payouts.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            months,
            vec!["January", "February", "March", "April", "May", "July", "September"]
        );
    }

    #[test]
    fn save_rejects_bad_input_without_touching_state() {
        let mut s = Scholarship::default();
        assert_eq!(s.save(&form("", "March", "10")), Err(ScholarshipError::EmptyName));
        assert!(matches!(
            s.save(&form("Grant", "March", "-4")),
            Err(ScholarshipError::InvalidAmount(_))
        ));
        assert!(matches!(
            s.save(&form("Grant", "Smarch", "10")),
            Err(ScholarshipError::UnknownMonth(_))
        ));
        assert_eq!(s, Scholarship::default());
    }
}
