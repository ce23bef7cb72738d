/// Трейт для записей каталога (проекты, услуги).
///
/// Минимальный контракт, который нужен карточкам и селекторам:
/// `id`, `slug`, `title`, `category`, `image`. Детальные страницы
/// дополнительно читают `images`.
pub trait CatalogRecord {
    /// Стабильный идентификатор записи
    fn id(&self) -> &str;

    /// Уникальный в пределах каталога URL-ключ
    fn slug(&self) -> &str;

    fn title(&self) -> &str;

    /// Код категории (совпадает с `Category::id`, но не обязан)
    fn category(&self) -> &str;

    /// Основное изображение для карточек
    fn image(&self) -> &str;

    /// Галерея, минимум один элемент
    fn images(&self) -> &[String];

    fn is_featured(&self) -> bool;
}
