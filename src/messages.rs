//! User-facing text (pt-BR).

pub const HEADER_NEW: &str = "Novo agendamento";
pub const HEADER_LIST: &str = "Agendamentos";

pub const REGISTER_TITLE: &str = "Preencha as informações abaixo";
pub const REGISTER_SUCCESS: &str = "Formulário cadastrado com sucesso!";
pub const REGISTER_FAILED: &str = "Erro ao enviar o formulário. Tente novamente.";

pub const LIST_TITLE: &str = "Lista de Agendamentos";
pub const LIST_NOT_FOUND: &str = "Nenhum agendamento encontrado.";
pub const UPDATE_TITLE: &str = "Atualizar Agendamento";
pub const UPDATE_FAILED: &str = "Erro ao atualizar o agendamento";
pub const UPDATE_UNREACHABLE: &str = "Erro ao atualizar o agendamento. Tente novamente.";
pub const DELETE_CONFIRM: &str = "Tem certeza que deseja excluir este agendamento?";

pub const COLUMN_NAME: &str = "Nome";
pub const COLUMN_DATE: &str = "Data";
pub const COLUMN_LOCATION: &str = "Local";
pub const DATE_HINT: &str = "dd/MM/yyyy HH:mm";
