mod related;

use self::related::RelatedServices;
use crate::layout::global_context::{service_catalog, use_global_context};
use crate::shared::icons::icon;
use crate::shared::not_found::NotFoundView;
use crate::shared::resolution::use_slug_resolution;
use contracts::domain::a002_service::aggregate::Service;
use contracts::enums::catalog_kind::CatalogKind;
use contracts::shared::routing::{RedirectToList, Resolution};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::{Badge, BadgeAppearance, BadgeColor, Spinner};

#[component]
#[allow(non_snake_case)]
pub fn ServiceDetails() -> impl IntoView {
    let resolution = use_slug_resolution(service_catalog);

    move || match resolution.get() {
        Resolution::Loading => view! {
            <div class="service-detail-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Resolution::Found(service) => view! { <ServiceDetailsView service=service /> }.into_any(),
        not_found => {
            let action = not_found.not_found_action(&RedirectToList(CatalogKind::Services));
            action.map(|action| view! { <NotFoundView action=action /> }).into_any()
        }
    }
}

fn list_section(class: &'static str, title: &'static str, items: &[String]) -> Option<AnyView> {
    if items.is_empty() {
        return None;
    }
    let items = items
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view();
    Some(
        view! {
            <div class=class>
                <h3>{title}</h3>
                <ul>{items}</ul>
            </div>
        }
        .into_any(),
    )
}

#[component]
#[allow(non_snake_case)]
fn ServiceDetailsView(service: Arc<Service>) -> impl IntoView {
    let ctx = use_global_context();
    let category_name = ctx.content.with_value(|c| {
        c.services
            .category_name(&service.category)
            .unwrap_or(service.category.as_str())
            .to_string()
    });

    let active_image = RwSignal::new(0usize);
    let images = service.images.clone();
    let main_image = {
        let images = images.clone();
        let fallback = service.image.clone();
        move || {
            images
                .get(active_image.get())
                .cloned()
                .unwrap_or_else(|| fallback.clone())
        }
    };

    let meta = [
        ("Duration", service.duration.clone()),
        ("Investment", service.price_range.clone()),
        ("Team", Some(service.team_size_label())),
    ];

    let process = service
        .numbered_process()
        .map(|(number, step)| {
            let step = step.to_string();
            view! {
                <li class="service-process__step">
                    <span class="service-process__number">{number}</span>
                    <p>{step}</p>
                </li>
            }
        })
        .collect_view();

    let benefits = service
        .benefits
        .iter()
        .map(|benefit| view! {
            <li>
                {icon("check")}
                <span>{benefit.clone()}</span>
            </li>
        })
        .collect_view();

    let tags = service
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.clone();
            view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {tag}
                </Badge>
            }
        })
        .collect_view();

    view! {
        <article class="service-detail">
            <nav class="breadcrumb">
                <a href="/">"Home"</a>
                <span class="breadcrumb__sep">"/"</span>
                <a href=CatalogKind::Services.list_path()>"Services"</a>
                <span class="breadcrumb__sep">"/"</span>
                <span class="breadcrumb__current">{service.title.clone()}</span>
            </nav>

            <header class="service-detail__header">
                <span class="service-detail__category">{category_name}</span>
                <h1>
                    <span class="service-detail__icon">{service.icon.clone().unwrap_or_default()}</span>
                    {service.title.clone()}
                </h1>
                <p class="service-detail__lead">{service.description.clone()}</p>
                <dl class="service-detail__meta">
                    {meta
                        .into_iter()
                        .filter_map(|(label, value)| value.map(|v| (label, v)))
                        .map(|(label, value)| view! {
                            <div>
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </header>

            <section class="service-detail__media">
                <img class="service-detail__main-image" src=main_image alt=service.title.clone() />
                <div class="service-detail__thumbnails">
                    {images
                        .iter()
                        .enumerate()
                        .map(|(i, src)| view! {
                            <button
                                class=move || if active_image.get() == i { "thumbnail active" } else { "thumbnail" }
                                on:click=move |_| active_image.set(i)
                            >
                                <img src=src.clone() alt="" loading="lazy" />
                            </button>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="service-detail__overview">
                <p>{service.full_description.clone()}</p>
            </section>

            <section class="service-process">
                <h2>"Our Process"</h2>
                <ol>{process}</ol>
            </section>

            <section class="service-benefits">
                <div class="service-benefits__text">
                    <h2>"Key Benefits"</h2>
                    <ul>{benefits}</ul>
                </div>
                <img src=service.secondary_image().to_string() alt=service.title.clone() loading="lazy" />
            </section>

            <section class="service-detail__lists">
                {list_section("service-team", "Team", &service.team)}
                {list_section("service-deliverables", "Deliverables", &service.deliverables)}
            </section>

            <div class="service-detail__tags">{tags}</div>

            <RelatedServices service=Arc::clone(&service) />

            <section class="service-cta">
                <h2>"Ready to start your project?"</h2>
                <a href="/contact" class="service-cta__button">
                    <span>"Get in touch"</span>
                    {icon("arrow-right")}
                </a>
            </section>
        </article>
    }
}
