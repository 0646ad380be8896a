//! User-facing Russian copy, kept in one place.

use api::ApiError;

pub const SIGN_IN_OR_REGISTER: &str = "Вход / Регистрация";
pub const LOG_OUT: &str = "Выйти";
pub const VIEW_PROFILE: &str = "Смотреть профиль";

pub const REGISTER_OK: &str = "Регистрация прошла успешно";
pub const REGISTER_FAILED: &str = "Ошибка регистрации";
pub const LOGIN_OK: &str = "Вы успешно вошли";
pub const LOGIN_FAILED: &str = "Ошибка входа";
pub const ORDER_SIGN_IN: &str = "Для размещения заказа нужно войти или зарегистрироваться";
pub const ORDER_OK: &str = "Заказ опубликован";
pub const ORDER_FAILED: &str = "Ошибка при создании заказа";
pub const POST_SIGN_IN: &str = "Для создания публикации нужно войти или зарегистрироваться";
pub const POST_FAILED: &str = "Ошибка при создании публикации";
pub const CONNECTION_ERROR: &str = "Ошибка соединения с сервером";
pub const FILE_READ_FAILED: &str = "Ошибка чтения файла";

pub const NOTHING_FOUND: &str = "Ничего не найдено";
pub const CONTRACTORS_FAILED: &str = "Ошибка загрузки подрядчиков";
pub const NO_POSTS: &str = "Пока нет публикаций";
pub const FEED_FAILED: &str = "Ошибка загрузки ленты";

pub const NO_RATING: &str = "Нет рейтинга";
pub const NO_DESCRIPTION: &str = "Описание отсутствует";
pub const PROFILE_NOT_FOUND: &str = "Профиль не найден.";

/// Categories offered by the order and search forms.
pub const CATEGORIES: &[&str] = &[
    "Ремонт",
    "Сантехника",
    "Электрика",
    "Уборка",
    "Перевозки",
    "Репетиторство",
    "Дизайн",
    "IT",
];

/// Auth link label for a signed-in user.
pub fn signed_in_as(username: &str) -> String {
    format!("Вы: {username}")
}

/// What to alert when a request fails: the server's `detail`, the form's
/// fallback for other HTTP rejections, or the connection message when no
/// usable response arrived.
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Http { .. } => err.detail().unwrap_or(fallback).to_string(),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
            CONNECTION_ERROR.to_string()
        }
    }
}
