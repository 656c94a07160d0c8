//! The compiled-in resource set for Stable Diffusion WebUI Forge.
//!
//! License review: every entry is Apache 2.0, MIT, OpenRAIL or
//! CreativeML Open RAIL-M.

use crate::domain::{License, Priority, ResourceRecord, ResourceType};

use super::catalog::{Catalog, Category};

impl Catalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Catalog::new()
            .with_records(Category::Extensions, extensions())
            .with_records(Category::ControlnetSd15, controlnet_sd15())
            .with_records(Category::ControlnetSdxl, controlnet_sdxl())
            .with_records(Category::Vae, vae_models())
            .with_records(Category::Upscalers, upscalers())
    }
}

fn extension(path: &str, url: &str, license: License) -> ResourceRecord {
    ResourceRecord::new(path, url, ResourceType::Extension, license)
}

fn extensions() -> Vec<ResourceRecord> {
    vec![
        extension(
            "extensions/sd-webui-controlnet",
            "https://github.com/Mikubill/sd-webui-controlnet.git",
            License::Apache20,
        )
        .with_description("ControlNet extension - precise control over generation")
        .with_priority(Priority::Required),
        extension(
            "extensions/sd-dynamic-prompts",
            "https://github.com/adieyal/sd-dynamic-prompts.git",
            License::Mit,
        )
        .with_description("Dynamic prompts - batch prompt variations")
        .with_priority(Priority::Recommended),
        extension(
            "extensions/sd-webui-regional-prompter",
            "https://github.com/hako-mikan/sd-webui-regional-prompter.git",
            License::Mit,
        )
        .with_description("Regional prompter - per-region prompt control")
        .with_priority(Priority::Recommended),
        extension(
            "extensions/a1111-sd-webui-tagcomplete",
            "https://github.com/DominikDoom/a1111-sd-webui-tagcomplete.git",
            License::Mit,
        )
        .with_description("Tag autocompletion")
        .with_priority(Priority::Recommended),
        extension(
            "extensions/stable-diffusion-webui-images-browser",
            "https://github.com/AlUlkesh/stable-diffusion-webui-images-browser.git",
            License::Apache20,
        )
        .with_description("Image browser")
        .with_priority(Priority::Optional),
        extension(
            "extensions/sd-civitai-browser-plus",
            "https://github.com/BlafKing/sd-civitai-browser-plus.git",
            License::Mit,
        )
        .with_description("Enhanced Civitai model browser")
        .with_priority(Priority::Recommended),
        extension(
            "extensions/sd-webui-decadetw-auto-prompt-llm",
            "https://github.com/Decadetw/sd-webui-decadetw-auto-prompt-llm.git",
            License::Mit,
        )
        .with_description("LLM-assisted prompt generation")
        .with_priority(Priority::Optional),
    ]
}

fn controlnet_sd15() -> Vec<ResourceRecord> {
    let model = |path: &str, url: &str| {
        ResourceRecord::new(path, url, ResourceType::ControlnetSd15, License::OpenRail)
            .with_size_mb(1440)
    };

    vec![
        model(
            "models/ControlNet/control_v11p_sd15_canny.pth",
            "https://huggingface.co/lllyasviel/ControlNet-v1-1/resolve/main/control_v11p_sd15_canny.pth",
        )
        .with_description("Canny edge detection")
        .with_priority(Priority::Required),
        model(
            "models/ControlNet/control_v11p_sd15_depth.pth",
            "https://huggingface.co/lllyasviel/ControlNet-v1-1/resolve/main/control_v11f1p_sd15_depth.pth",
        )
        .with_description("Depth map control")
        .with_priority(Priority::Required),
        model(
            "models/ControlNet/control_v11p_sd15_openpose.pth",
            "https://huggingface.co/lllyasviel/ControlNet-v1-1/resolve/main/control_v11p_sd15_openpose.pth",
        )
        .with_description("Pose control")
        .with_priority(Priority::Recommended),
        model(
            "models/ControlNet/control_v11p_sd15_lineart.pth",
            "https://huggingface.co/lllyasviel/ControlNet-v1-1/resolve/main/control_v11p_sd15_lineart.pth",
        )
        .with_description("Line art control")
        .with_priority(Priority::Recommended),
        model(
            "models/ControlNet/control_v11f1p_sd15_tile.pth",
            "https://huggingface.co/lllyasviel/ControlNet-v1-1/resolve/main/control_v11f1e_sd15_tile.pth",
        )
        .with_description("Tile upscaling (recommended for fabric detail)")
        .with_priority(Priority::Required),
    ]
}

fn controlnet_sdxl() -> Vec<ResourceRecord> {
    let model = |path: &str, url: &str| {
        ResourceRecord::new(path, url, ResourceType::ControlnetSdxl, License::OpenRail)
    };

    vec![
        model(
            "models/ControlNet/controlnet-union-sdxl-1.0-promax.safetensors",
            "https://huggingface.co/xinsir/controlnet-union-sdxl-1.0/resolve/main/diffusion_pytorch_model_promax.safetensors",
        )
        .with_description(
            "Union model - one model for 10+ conditions (Canny, Tile, Depth, Blur, Pose, Gray, \
             Low Quality, Recolor, Scribble/Sketch)",
        )
        .with_size_mb(2500)
        .with_priority(Priority::Required),
        model(
            "models/ControlNet/controlnet-canny-sdxl-1.0.safetensors",
            "https://huggingface.co/diffusers/controlnet-canny-sdxl-1.0/resolve/main/diffusion_pytorch_model.fp16.safetensors",
        )
        .with_description("Canny edge detection (official diffusers, FP16)")
        .with_size_mb(1250)
        .with_priority(Priority::Recommended),
        model(
            "models/ControlNet/controlnet-depth-sdxl-1.0.safetensors",
            "https://huggingface.co/diffusers/controlnet-depth-sdxl-1.0/resolve/main/diffusion_pytorch_model.fp16.safetensors",
        )
        .with_description("Depth map control (official diffusers, FP16)")
        .with_size_mb(1250)
        .with_priority(Priority::Recommended),
        model(
            "models/ControlNet/controlnet-tile-sdxl-1.0.safetensors",
            "https://huggingface.co/xinsir/controlnet-tile-sdxl-1.0/resolve/main/diffusion_pytorch_model.safetensors",
        )
        .with_description("Tile upscaling (fabric and garment detail)")
        .with_size_mb(2500)
        .with_priority(Priority::Required),
    ]
}

fn vae_models() -> Vec<ResourceRecord> {
    vec![
        ResourceRecord::new(
            "models/VAE/vae-ft-mse-840000-ema-pruned.safetensors",
            "https://huggingface.co/stabilityai/sd-vae-ft-mse-original/resolve/main/vae-ft-mse-840000-ema-pruned.safetensors",
            ResourceType::Vae,
            License::CreativeMl,
        )
        .with_description("Official SD 1.5 VAE")
        .with_size_mb(335)
        .with_priority(Priority::Recommended),
        ResourceRecord::new(
            "models/VAE/sdxl_vae.safetensors",
            "https://huggingface.co/stabilityai/sdxl-vae/resolve/main/sdxl_vae.safetensors",
            ResourceType::Vae,
            License::CreativeMl,
        )
        .with_description("Official SDXL VAE")
        .with_size_mb(335)
        .with_priority(Priority::Recommended),
    ]
}

fn upscalers() -> Vec<ResourceRecord> {
    let model = |path: &str, url: &str, license: License, size_mb: u64| {
        ResourceRecord::new(path, url, ResourceType::Upscaler, license).with_size_mb(size_mb)
    };

    vec![
        model(
            "models/ESRGAN/RealESRGAN_x4plus.pth",
            "https://github.com/xinntao/Real-ESRGAN/releases/download/v0.1.0/RealESRGAN_x4plus.pth",
            License::Apache20,
            64,
        )
        .with_description("RealESRGAN 4x - general purpose, fast")
        .with_priority(Priority::Required),
        model(
            "models/ESRGAN/RealESRGAN_x4plus_anime_6B.pth",
            "https://github.com/xinntao/Real-ESRGAN/releases/download/v0.1.1/RealESRGAN_x4plus_anime_6B.pth",
            License::Apache20,
            64,
        )
        .with_description("RealESRGAN 4x Anime - anime style")
        .with_priority(Priority::Recommended),
        model(
            "models/ESRGAN/RealESRGAN_x2plus.pth",
            "https://github.com/xinntao/Real-ESRGAN/releases/download/v0.2.1/RealESRGAN_x2plus.pth",
            License::Apache20,
            64,
        )
        .with_description("RealESRGAN 2x - light upscaling")
        .with_priority(Priority::Optional),
        model(
            "models/SwinIR/003_realSR_BSRGAN_DFOWMFC_s64w8_SwinIR-L_x4_GAN.pth",
            "https://github.com/JingyunLiang/SwinIR/releases/download/v0.0/003_realSR_BSRGAN_DFOWMFC_s64w8_SwinIR-L_x4_GAN.pth",
            License::Apache20,
            136,
        )
        .with_description("SwinIR Large - best detail retention (9.7/10), fabric and texture")
        .with_priority(Priority::Required),
        model(
            "models/SwinIR/003_realSR_BSRGAN_DFO_s64w8_SwinIR-M_x4_GAN.pth",
            "https://github.com/JingyunLiang/SwinIR/releases/download/v0.0/003_realSR_BSRGAN_DFO_s64w8_SwinIR-M_x4_GAN.pth",
            License::Apache20,
            50,
        )
        .with_description("SwinIR Medium - balanced speed and quality")
        .with_priority(Priority::Recommended),
        model(
            "models/HAT/HAT_SRx4_ImageNet-pretrain.pth",
            "https://github.com/XPixelGroup/HAT/releases/download/v1.0.0/HAT_SRx4_ImageNet-pretrain.pth",
            License::Apache20,
            150,
        )
        .with_description("HAT - best on real photos (garment and fabric photography)")
        .with_priority(Priority::Required),
        model(
            "models/ESRGAN/4x-UltraSharp.pth",
            "https://huggingface.co/Kim2091/UltraSharp/resolve/main/4x-UltraSharp.pth",
            License::CreativeMl,
            67,
        )
        .with_description("UltraSharp 4x - sharpening")
        .with_priority(Priority::Recommended),
    ]
}
