/*
 * Responsibility
 * - 画面ごとの振る舞い (一覧の絞り込み / 関連記事 / 編集フォーム / 管理画面)
 * - handler からは HTTP を知らない形で呼ぶ
 */
pub mod admin;
pub mod blog_view;
pub mod editor;
pub mod listing;
pub mod related;
