use crate::core::pricing::PricingTable;
use crate::core::{PricingPlan, RosterSource, Student, Tutor};
use crate::utils::error::{PayoutError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Interactive roster intake. Answers are read as whitespace-separated tokens,
/// so several answers may share one line.
pub struct ConsoleIntake<R: BufRead, W: Write> {
    input: R,
    prompts: W,
    pricing: PricingTable,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleIntake<R, W> {
    pub fn new(input: R, prompts: W, pricing: PricingTable) -> Self {
        Self {
            input,
            prompts,
            pricing,
            pending: VecDeque::new(),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.prompts, "{}", text)?;
        self.prompts.flush()?;
        Ok(())
    }

    fn next_token(&mut self, field: &str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PayoutError::InputExhausted {
                    field: field.to_string(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn ask_token(&mut self, text: &str, field: &str) -> Result<String> {
        self.prompt(text)?;
        self.next_token(field)
    }

    /// Re-prompts until the answer parses as `T`.
    fn ask_parsed<T: FromStr>(&mut self, text: &str, field: &str) -> Result<T> {
        loop {
            let token = self.ask_token(text, field)?;
            match token.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    let err = PayoutError::InvalidInput {
                        field: field.to_string(),
                        value: token,
                        reason: "expected a whole, non-negative number".to_string(),
                    };
                    tracing::debug!("{}", err);
                    writeln!(self.prompts, "{}", err.recovery_suggestion())?;
                }
            }
        }
    }

    /// Returns the identifier as typed once it names a known plan.
    fn ask_plan(&mut self, student: &str) -> Result<String> {
        let text = format!("{}'s pricing plan ({}): ", student, PricingPlan::choices());
        loop {
            let token = self.ask_token(&text, "pricing plan")?;
            match token.parse::<PricingPlan>() {
                Ok(_) => return Ok(token),
                Err(e) => tracing::debug!("{}", e),
            }
        }
    }

    fn collect_student(&mut self, tutor: &str, ordinal: usize) -> Result<Student> {
        let name = self.ask_token(
            &format!("First name of {} student #{}: ", tutor, ordinal),
            "student name",
        )?;

        loop {
            let plan = self.ask_plan(&name)?;
            let payments: u32 = self.ask_parsed(
                &format!("Number of {}'s payments processed this cycle: ", name),
                "payments processed",
            )?;
            let sessions: u32 = self.ask_parsed(
                &format!("Number of {}'s hour-long sessions per week: ", name),
                "weekly sessions",
            )?;
            let biweekly = sessions == 2;

            match self.pricing.weekly_cost_for(&plan, biweekly) {
                Ok(cost) => return Student::new(name, cost, payments, biweekly),
                Err(PayoutError::InvalidWeeklyCost { cost, .. }) => {
                    let err = PayoutError::InvalidWeeklyCost {
                        student: name.clone(),
                        cost,
                    };
                    tracing::warn!("{}", err);
                    writeln!(self.prompts, "{}", err.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn collect_tutor(&mut self, ordinal: usize) -> Result<Tutor> {
        let name = self.ask_token(&format!("First name of Tutor {}: ", ordinal), "tutor name")?;
        let student_count: usize = self.ask_parsed(
            &format!("How many students did {} tutor this cycle? ", name),
            "student count",
        )?;

        let mut students = Vec::new();
        for i in 1..=student_count {
            students.push(self.collect_student(&name, i)?);
        }
        tracing::debug!("Collected {} students for {}", students.len(), name);

        Ok(Tutor::new(name, students))
    }
}

impl<R: BufRead, W: Write> RosterSource for ConsoleIntake<R, W> {
    fn collect_roster(&mut self) -> Result<Vec<Tutor>> {
        let tutor_count: usize =
            self.ask_parsed("How many tutors worked this week? ", "tutor count")?;

        let mut tutors = Vec::new();
        for i in 1..=tutor_count {
            tutors.push(self.collect_tutor(i)?);
        }
        Ok(tutors)
    }
}
