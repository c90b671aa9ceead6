//! User-facing constants shared by the screens.

/// Default number of rows per listing page.
pub const LIMITE_DE_LINHAS: u32 = 5;

/// Placeholder of the listing search input.
pub const INPUT_DE_BUSCA: &str = "Pesquisar...";

/// Shown when a listing has no rows.
pub const LISTAGEM_VAZIA: &str = "Nenhum registro encontrado.";

/// Default base URL of the record API.
pub const URL_BASE: &str = "http://localhost:3333";

/// Label of the "new record" toolbar buttons.
pub const TEXTO_BOTAO_NOVO: &str = "Nova";

pub const CONFIRMAR_EXCLUSAO: &str = "Realmente deseja apagar?";

pub const REGISTRO_APAGADO: &str = "Registro apagado com sucesso";
