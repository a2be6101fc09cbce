use clap::{Parser, Subcommand};

const ASCII_LOGO: &str = r#"
                 ___  ___              _   _ _     _                    ______
                 |  \/  |             | | | (_)   | |                   |  ___|
                 | .  . | _ __  __ _  | |_| |_ ___| |_ ___  _ __ _   _  | |_ ___  _ __ __ _  ___
                 | |\/| || '__|/ _` | |  _  | / __| __/ _ \| '__| | | | |  _/ _ \| '__/ _` |/ _ \
                 | |  | || |  | (_| | | | | | \__ \ || (_) | |  | |_| | | || (_) | |  | (_| |  __/
                 \_|  |_/|_|   \__,_| \_| |_/_|___/\__\___/|_|   \__, | \_| \___/|_|   \__, |\___|
                                                                  __/ |                 __/ |
                                                                 |___/                 |___/
"#;

const EXAMPLES: &str = r#"
ПРИМЕРЫ ИСПОЛЬЗОВАНИЯ:

  1. ПРОСМОТР (Dump)
     Распечатать всю переписку из контейнера в консоль:
     MraHistoryForge dump --path mra.dbs

     Только диалоги с адресами @mail.ru, с подробным выводом:
     MraHistoryForge dump -p mra.dbs -f "*@mail.ru" -v

  2. ВЫГРУЗКА (Export)
     Выгрузить все сообщения в формат JSONL (1 строка - 1 сообщение):
     MraHistoryForge export --path mra.dbs --out-json report.jsonl

     Или коротко:
     MraHistoryForge export -p mra.dbs -j report.jsonl

  3. СВОДКА (Stats)
     Посчитать сообщения по каждому корреспонденту, без текстов:
     MraHistoryForge stats -p mra.dbs
"#;

#[derive(Parser, Debug)]
#[command(name = "MraHistoryForge")]
#[command(version = "1.0")]
#[command(before_help = ASCII_LOGO)] // Логотип НАД меню
#[command(about = "Декодер контейнера истории Mail.ru Agent (mra.dbs)")]
#[command(after_help = EXAMPLES)]    // Примеры ПОД меню
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Печатает переписку в консоль: корреспонденты и их сообщения
    Dump {
        /// Путь к mra.dbs
        #[arg(short, long)]
        path: String,
        /// Фильтр по имени корреспондента (подстрока либо glob с * и ?)
        #[arg(short, long)]
        filter: Option<String>,
        /// Подробный вывод: смещения, пропущенные записи
        #[arg(short, long)]
        verbose: bool,
    },
    /// Выгружает сообщения в JSONL (JSON Lines) + метаданные контейнера
    Export {
        /// Путь к mra.dbs
        #[arg(short, long)]
        path: String,
        /// Путь к итоговому JSONL (1 строка - 1 сообщение)
        #[arg(short = 'j', long)]
        out_json: String,
        /// Фильтр по имени корреспондента (подстрока либо glob с * и ?)
        #[arg(short, long)]
        filter: Option<String>,
        /// Подробный вывод: смещения, пропущенные записи
        #[arg(short, long)]
        verbose: bool,
    },
    /// Печатает только счётчики сообщений по корреспондентам
    Stats {
        /// Путь к mra.dbs
        #[arg(short, long)]
        path: String,
        /// Фильтр по имени корреспондента (подстрока либо glob с * и ?)
        #[arg(short, long)]
        filter: Option<String>,
    },
}
