use crate::api::HrmApi;
use crate::cli::render;
use crate::cli::{AttendanceCommand, Command, EmployeeCommand};
use crate::confirm::{AssumeYes, Confirm, ConsoleConfirm};
use crate::model::{AttendanceQuery, NewEmployee};
use crate::notify::Notifier;
use crate::views::{
    AttendanceField, AttendanceList, AttendanceScreen, DeleteOutcome, EmployeeField, EmployeeList,
    EmployeesScreen, LoadState, SubmitOutcome,
};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::{info, instrument};

/// Run one subcommand against the backend. `today` caps attendance dates.
pub async fn run<A, N>(command: Command, api: &A, notifier: &N, today: NaiveDate) -> Result<()>
where
    A: HrmApi + ?Sized,
    N: Notifier + ?Sized,
{
    match command {
        Command::Employees(EmployeeCommand::List) => list_employees(api).await,
        Command::Employees(EmployeeCommand::Add {
            employee_id,
            full_name,
            email,
            department,
        }) => {
            let values = NewEmployee {
                employee_id,
                full_name,
                email,
                department,
            };
            add_employee(api, notifier, values).await
        }
        Command::Employees(EmployeeCommand::Delete { ids, yes }) => {
            let confirm: &dyn Confirm = if yes { &AssumeYes } else { &ConsoleConfirm };
            delete_employees(api, notifier, confirm, &ids).await
        }
        Command::Attendance(AttendanceCommand::List {
            date,
            status,
            employee,
        }) => {
            let mut list = AttendanceList::with_query(AttendanceQuery {
                employee,
                date: None,
            });
            list.set_date_filter(date);
            list.set_status_filter(status);
            list.load(api).await;

            println!("{}", render::attendance(&list));
            if let LoadState::Error(msg) = list.state() {
                bail!(msg);
            }
            Ok(())
        }
        Command::Attendance(AttendanceCommand::Mark {
            employee,
            date,
            status,
        }) => {
            let mut screen = AttendanceScreen::new(today);
            screen.mount(api).await;

            if let Some(id) = employee {
                screen.form.select_employee(id);
            }
            if let Some(d) = date {
                screen.form.set_date(Some(d));
            }
            screen.form.set_status(status);

            match screen.submit(api, notifier).await {
                SubmitOutcome::Accepted(record) => {
                    info!(id = record.id, "Attendance recorded from console");
                    println!("{}", render::attendance(&screen.list));
                    Ok(())
                }
                SubmitOutcome::Invalid => {
                    let errors = [
                        ("Employee", screen.form.error(AttendanceField::Employee)),
                        ("Date", screen.form.error(AttendanceField::Date)),
                    ];
                    eprintln!(
                        "{}",
                        render::field_errors(
                            errors.iter().filter_map(|(l, e)| e.map(|e| (*l, e)))
                        )
                    );
                    bail!("attendance form is invalid");
                }
                SubmitOutcome::Rejected(msg) => bail!(msg),
            }
        }
    }
}

async fn list_employees<A: HrmApi + ?Sized>(api: &A) -> Result<()> {
    let mut list = EmployeeList::new();
    list.load(api).await;

    println!("{}", render::employees(&list));
    if let LoadState::Error(msg) = list.state() {
        bail!(msg);
    }
    Ok(())
}

#[instrument(name = "console_add_employee", skip_all, fields(employee_id = %values.employee_id))]
async fn add_employee<A, N>(api: &A, notifier: &N, values: NewEmployee) -> Result<()>
where
    A: HrmApi + ?Sized,
    N: Notifier + ?Sized,
{
    let mut screen = EmployeesScreen::new();
    screen.form.set(EmployeeField::EmployeeId, values.employee_id);
    screen.form.set(EmployeeField::FullName, values.full_name);
    screen.form.set(EmployeeField::Email, values.email);
    screen.form.set(EmployeeField::Department, values.department);

    match screen.submit(api, notifier).await {
        SubmitOutcome::Accepted(_) => {
            println!("{}", render::employees(&screen.list));
            Ok(())
        }
        SubmitOutcome::Invalid => {
            let labels = [
                (EmployeeField::EmployeeId, "Employee ID"),
                (EmployeeField::FullName, "Full Name"),
                (EmployeeField::Email, "Email"),
                (EmployeeField::Department, "Department"),
            ];
            eprintln!(
                "{}",
                render::field_errors(
                    labels
                        .iter()
                        .filter_map(|(f, l)| screen.form.error(*f).map(|e| (*l, e)))
                )
            );
            bail!("employee form is invalid");
        }
        SubmitOutcome::Rejected(msg) => bail!(msg),
    }
}

async fn delete_employees<A, N>(api: &A, notifier: &N, confirm: &dyn Confirm, ids: &[u64]) -> Result<()>
where
    A: HrmApi + ?Sized,
    N: Notifier + ?Sized,
{
    let mut list = EmployeeList::new();
    list.load(api).await;
    if let LoadState::Error(msg) = list.state() {
        bail!(msg);
    }

    let outcomes = list.delete_many(api, notifier, confirm, ids).await;

    let mut failed = 0;
    for (id, outcome) in &outcomes {
        match outcome {
            DeleteOutcome::NotListed => eprintln!("No employee with id {id}"),
            DeleteOutcome::Cancelled => eprintln!("Kept employee {id}"),
            DeleteOutcome::Failed => failed += 1,
            DeleteOutcome::Deleted | DeleteOutcome::Busy => {}
        }
    }

    println!("{}", render::employees(&list));
    if failed > 0 {
        bail!("{failed} employee(s) could not be removed");
    }
    Ok(())
}
