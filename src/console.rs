//! Line-oriented terminal front-end that mounts the two screens.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use crate::messages;
use crate::screens::{AppointmentRow, RegistrationScreen, ScheduleScreen};
use crate::state::AppState;

pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

/// Console bound to the process's stdin and stdout.
pub fn stdio() -> Console<BufReader<Stdin>, Stdout> {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the header menu until `q` or end of input.
    pub async fn run(&mut self, state: &AppState) -> io::Result<()> {
        loop {
            self.say(&format!(
                "\n1) {}  2) {}  q) Sair\n",
                messages::HEADER_NEW,
                messages::HEADER_LIST
            ))
            .await?;
            let Some(choice) = self.read_line(">").await? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.registration(state.registration()).await?,
                "2" => self.schedule(state.schedule()).await?,
                "q" => return Ok(()),
                _ => {}
            }
        }
    }

    async fn registration(&mut self, mut screen: RegistrationScreen) -> io::Result<()> {
        self.say(&format!("\n{}\n", messages::REGISTER_TITLE)).await?;
        loop {
            let draft = screen.draft().clone();
            let Some(name) = self.read_field("Nome", &draft.name).await? else {
                return Ok(());
            };
            let Some(date) = self
                .read_field("Data e Hora (AAAA-MM-DDTHH:MM)", &draft.date)
                .await?
            else {
                return Ok(());
            };
            let Some(location) = self.read_field("Local", &draft.location).await? else {
                return Ok(());
            };
            screen.set_name(name);
            screen.set_date(date);
            screen.set_location(location);

            let _ = screen.submit().await;
            if let Some(error) = screen.error_message() {
                self.say(&format!("! {}\n", error)).await?;
            }
            if let Some(success) = screen.success_message() {
                self.say(&format!("{}\n", success)).await?;
            }

            match self.read_line("s) Salvar novamente  v) Voltar").await?.as_deref() {
                Some("s") => continue,
                _ => return Ok(()),
            }
        }
    }

    async fn schedule(&mut self, mut screen: ScheduleScreen) -> io::Result<()> {
        let _ = screen.mount().await;
        loop {
            self.say(&format!("\n{}\n", messages::LIST_TITLE)).await?;
            if let Some(error) = screen.error() {
                self.say(&format!("! {}\n", error)).await?;
            }
            self.say(&render_table(&screen.rows())).await?;

            let Some(command) = self
                .read_line("a <id>) Atualizar  e <id>) Excluir  r) Recarregar  v) Voltar")
                .await?
            else {
                return Ok(());
            };
            let mut parts = command.split_whitespace();
            let action = parts.next().unwrap_or_default();
            let id = parts.next().and_then(|s| s.parse::<i64>().ok());

            match (action, id) {
                ("a", Some(id)) => {
                    if screen.begin_edit(id) {
                        self.edit(&mut screen).await?;
                    }
                }
                ("e", Some(id)) => {
                    let answer = self
                        .read_line(&format!("{} (s/n)", messages::DELETE_CONFIRM))
                        .await?;
                    let approved = matches!(answer.as_deref(), Some("s" | "S" | "sim"));
                    screen.delete(id, &|_: &str| approved).await;
                }
                ("r", _) => {
                    let _ = screen.refresh().await;
                }
                ("v", _) => return Ok(()),
                _ => {}
            }
        }
    }

    async fn edit(&mut self, screen: &mut ScheduleScreen) -> io::Result<()> {
        self.say(&format!("\n{}\n", messages::UPDATE_TITLE)).await?;
        while let Some(current) = screen.current().cloned() {
            let Some(name) = self.read_field("Nome", &current.name).await? else {
                screen.cancel_edit();
                return Ok(());
            };
            let date_label = format!("Data ({})", messages::DATE_HINT);
            let Some(date) = self.read_field(&date_label, &current.date).await? else {
                screen.cancel_edit();
                return Ok(());
            };
            let Some(location) = self.read_field("Local", &current.location).await? else {
                screen.cancel_edit();
                return Ok(());
            };
            screen.set_current_name(name);
            screen.set_current_date(date);
            screen.set_current_location(location);

            match self.read_line("s) Salvar  c) Cancelar").await?.as_deref() {
                Some("s") => {
                    if screen.submit_edit().await.is_err() {
                        if let Some(error) = screen.error() {
                            self.say(&format!("! {}\n", error)).await?;
                        }
                    }
                }
                _ => screen.cancel_edit(),
            }
        }
        Ok(())
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    /// Empty input keeps `current`. `None` on end of input.
    async fn read_field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let prompt = if current.is_empty() {
            format!("{}:", label)
        } else {
            format!("{} [{}]:", label, current)
        };
        Ok(self.read_line(&prompt).await?.map(|value| {
            if value.is_empty() {
                current.to_string()
            } else {
                value
            }
        }))
    }

    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(&format!("{} ", prompt)).await?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}

/// Formats rows as a fixed-width table with a header line.
pub fn render_table(rows: &[AppointmentRow]) -> String {
    let headers = [
        "#",
        messages::COLUMN_NAME,
        messages::COLUMN_DATE,
        messages::COLUMN_LOCATION,
    ];
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| [r.id.to_string(), r.name.clone(), r.date.clone(), r.location.clone()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers.map(String::from), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}
