use contracts::shared::gallery::gallery_sections;
use leptos::prelude::*;

/// Галерея во всю ширину, разбитая на три блока
#[component]
pub fn ProjectGallery(images: Vec<String>, title: String) -> impl IntoView {
    let sections = gallery_sections(images.len());

    view! {
        <section class="project-gallery">
            {sections
                .into_iter()
                .enumerate()
                .filter(|(_, range)| !range.is_empty())
                .map(|(n, range)| {
                    let class = format!("project-gallery-section project-gallery-section-{}", n + 1);
                    let items = images[range.clone()]
                        .iter()
                        .zip(range)
                        .map(|(src, i)| view! {
                            <figure class="project-gallery-item">
                                <img
                                    src=src.clone()
                                    alt=format!("{} {}", title, i + 1)
                                    loading="lazy"
                                />
                            </figure>
                        })
                        .collect_view();
                    view! { <div class=class>{items}</div> }
                })
                .collect_view()}
        </section>
    }
}
