use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_element_bounding, use_element_size, use_mouse_in_element, use_raf_fn,
    UseElementBoundingReturn, UseElementSizeReturn, UseMouseInElementReturn, UseRafFnCallbackArgs,
};

use crate::field::{DotField, DotFrame, FieldConfig, Pointer};
use crate::motion::{magnetic_offset, magnetic_transform, Rect};

fn field_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

/// Dot grid filling its parent that shies away from the cursor.
///
/// The grid is rebuilt whenever the parent is resized and animated from a
/// single animation-frame loop, torn down with the component.
#[component]
pub fn InteractiveDots(#[prop(default = FieldConfig::default())] config: FieldConfig) -> impl IntoView {
    let area = NodeRef::<html::Div>::new();
    let field = StoredValue::new(DotField::new(config, field_seed()));
    let layout = RwSignal::new(Vec::<DotFrame>::new());
    let frames = RwSignal::new(Vec::<DotFrame>::new());

    let UseElementSizeReturn { width, height } = use_element_size(area);
    let UseMouseInElementReturn {
        element_x,
        element_y,
        is_outside,
        ..
    } = use_mouse_in_element(area);

    Effect::new(move |_| {
        let (w, h) = (width.get(), height.get());
        field.update_value(|f| f.regenerate(w, h));
        let fresh = field.with_value(|f| f.frames());
        log::debug!("dot field regenerated: {} dots for {w}x{h}", fresh.len());
        frames.set(fresh.clone());
        layout.set(fresh);
    });

    let raf = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let pointer = if is_outside.get_untracked() {
            Pointer::AWAY
        } else {
            Pointer::at(element_x.get_untracked(), element_y.get_untracked())
        };
        field.update_value(|f| f.step(args.delta / 1000.0, pointer));
        frames.set(field.with_value(|f| f.frames()));
    });
    on_cleanup(move || (raf.pause)());

    let size = format!("{}px", config.dot_size);
    view! {
        <div node_ref=area class="absolute inset-0">
            {move || {
                let size = size.clone();
                layout
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, dot)| {
                        let transform = move || {
                            frames
                                .with(|f| {
                                    f.get(i).map(|d| format!("translate({}px, {}px)", d.dx, d.dy))
                                })
                                .unwrap_or_default()
                        };
                        let opacity = move || {
                            frames
                                .with(|f| f.get(i).map(|d| d.opacity.to_string()))
                                .unwrap_or_default()
                        };
                        view! {
                            <div
                                id=dot.id.to_string()
                                class="absolute rounded-full bg-zinc-400/80 will-change-transform"
                                style:width=size.clone()
                                style:height=size.clone()
                                style:left=format!("{}px", dot.left)
                                style:top=format!("{}px", dot.top)
                                style:transform=transform
                                style:opacity=opacity
                            ></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Button that leans toward the cursor while hovered.
#[component]
pub fn MagneticButton(
    #[prop(into)] class: String,
    #[prop(into)] on_press: Callback<()>,
    children: Children,
) -> impl IntoView {
    let button = NodeRef::<html::Button>::new();
    let UseElementBoundingReturn {
        left,
        top,
        width,
        height,
        ..
    } = use_element_bounding(button);
    let (offset, set_offset) = signal(None::<(f64, f64)>);

    view! {
        <button
            node_ref=button
            class=format!("magnetic {class}")
            style:transform=move || magnetic_transform(offset.get())
            on:mousemove=move |ev: MouseEvent| {
                let rect = Rect {
                    left: left.get_untracked(),
                    top: top.get_untracked(),
                    width: width.get_untracked(),
                    height: height.get_untracked(),
                };
                set_offset.set(Some(magnetic_offset(&rect, ev.client_x() as f64, ev.client_y() as f64)));
            }
            on:mouseleave=move |_| set_offset.set(None)
            on:click=move |_| on_press.run(())
        >
            {children()}
        </button>
    }
}
