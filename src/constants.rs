pub const API_ORIGIN: &str = "https://api.syllabus.zen.ac.jp";
pub const SORT: &str = "code-asc";
pub const SHEET_PATH: &str = "syllabus.csv";

pub const MENU_TITLE: &str = "ZEN大学シラバス";
pub const MENU_REFRESH_LABEL: &str = "最新のシラバスを取得";

pub const HEADER_ROW: usize = 1;
pub const DATA_ROW: usize = 2;
pub const FIRST_COLUMN: usize = 1;

pub const HEADERS: [&str; 17] = [
    "科目コード",
    "名称",
    "科目の概要",
    "履修想定年次",
    "単位数",
    "開講Q",
    "科目区分",
    "授業の方法",
    "評価方法",
    "前提推奨科目",
    "前提必須科目",
    "後継推奨科目",
    "到達目標",
    "教科書・参考書",
    "授業時間外の学修",
    "特記事項",
    "Youtube",
];
